//! Single-page brochure layout.
//!
//! Section stubs carry the anchor ids the navigation links to; copy and
//! visual treatment are styling-layer concerns and stay minimal here.

use leptos::prelude::*;

use crate::components::navigation::Navigation;

/// The one routed page: navigation plus the anchored page sections.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navigation/>

        <main class="site-main">
            <section id="home" class="section section--hero">
                <h1>"Upright Investor Services LLP"</h1>
                <p>"Independent financial advice, held to a fiduciary standard."</p>
                <a class="section__cta" href="#contact">
                    "Arrange a consultation"
                </a>
            </section>

            <section id="about" class="section">
                <h2>"About"</h2>
                <p>
                    "We are a fee-only advisory partnership serving households and "
                    "small institutions since 2009."
                </p>
            </section>

            <section id="services" class="section">
                <h2>"Services"</h2>
                <p>
                    "Portfolio management, retirement planning, and estate "
                    "coordination, tailored to each client."
                </p>
            </section>

            <section id="team" class="section">
                <h2>"Team"</h2>
                <p>"Our partners and advisors."</p>
            </section>

            <section id="publications" class="section">
                <h2>"Publications"</h2>
                <p>"Quarterly letters and research notes."</p>
            </section>

            <section id="contact" class="section">
                <h2>"Contact"</h2>
                <p>"Write to us and we will respond within two business days."</p>
            </section>
        </main>

        <footer class="site-footer">
            <p>"Upright Investor Services LLP"</p>
        </footer>
    }
}
