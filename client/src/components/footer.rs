//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <span>"Wordsmith — AI-assisted article writing."</span>
            <nav class="footer__links">
                <a href="/writer">"Writer"</a>
                <a href="/payment">"Plans"</a>
            </nav>
        </footer>
    }
}
