//! Public landing page.

use leptos::prelude::*;

use crate::state::session::SessionSnapshot;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionSnapshot>>();

    view! {
        <div class="home-page">
            <section class="hero">
                <h1>"Write better articles, faster."</h1>
                <p class="hero__subtitle">
                    "Upload a reference document, set your tone and style, and let "
                    "Wordsmith draft the article for you."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/writer">
                        "Start Writing"
                    </a>
                    <Show when=move || session.get().user.is_none()>
                        <a class="btn" href="/auth">
                            "Create an Account"
                        </a>
                    </Show>
                </div>
            </section>
            <section class="home-page__features">
                <div class="feature-card">
                    <h3>"Reference-aware"</h3>
                    <p>"Ground your article in an uploaded document."</p>
                </div>
                <div class="feature-card">
                    <h3>"Tone and style control"</h3>
                    <p>"Five tones, five formats, any length from 200 to 2000 words."</p>
                </div>
                <div class="feature-card">
                    <h3>"Saved to your library"</h3>
                    <p>"Every article you keep is stored in your account."</p>
                </div>
            </section>
        </div>
    }
}
