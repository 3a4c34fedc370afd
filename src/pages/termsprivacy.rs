use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Privacy Policy"}</h1>
            <p class="legal-updated">{"Last updated: February 2nd, 2026"}</p>

            <section>
                <h2>{"1. Data We Collect"}</h2>
                <p>{"When you sign up for beta access or submit a form on this site, we collect:"}</p>
                <ul>
                    <li>{"Email address (to contact you about beta access)"}</li>
                    <li>{"Full name, when you provide it"}</li>
                    <li>{"The page you landed on, the referring site and campaign parameters from the link you followed"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How We Use Your Data"}</h2>
                <ul>
                    <li>{"To notify you when Seoscribed is available for your account"}</li>
                    <li>{"To generate and send the sample page you requested"}</li>
                    <li>{"To understand which marketing channels bring visitors to the site"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Cookies and Analytics"}</h2>
                <p>{"We use a small number of first-party cookies to remember where you came from \
                     and to avoid asking for the same information twice. We also use third-party \
                     analytics (PostHog, Google Analytics, Meta Pixel) to measure how the site is \
                     used. These providers receive usage data under their own privacy policies."}</p>
            </section>

            <section>
                <h2>{"4. Data Sharing"}</h2>
                <p>{"We do not sell your personal data. We share it only with the service providers \
                     that run this site (hosting, database, analytics) and only as needed to operate \
                     the service."}</p>
            </section>

            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"You can ask us at any time to:"}</p>
                <ul>
                    <li>{"See the data we hold about you"}</li>
                    <li>{"Correct or delete it"}</li>
                    <li>{"Stop contacting you about the beta"}</li>
                </ul>
            </section>

            <section>
                <h2>{"6. Contact Us"}</h2>
                <p>{"Questions about this policy? Email us at privacy@seoscribed.com."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <div class="legal-content terms-and-conditions">
            <style>{ LEGAL_CSS }</style>
            <h1>{"Terms of Service"}</h1>
            <p class="legal-updated">{"Last updated: February 2nd, 2026"}</p>

            <section>
                <h2>{"1. Acceptance of Terms"}</h2>
                <p>{"By signing up for beta access to Seoscribed you agree to these terms. If you do \
                     not agree, do not use the service."}</p>
            </section>

            <section>
                <h2>{"2. Beta Service"}</h2>
                <p>{"Seoscribed is in beta. Features may change, break or be removed without notice, \
                     and access may be limited or revoked at our discretion. Beta access is free; we \
                     will tell you before anything becomes paid."}</p>
            </section>

            <section>
                <h2>{"3. Your Content and Data"}</h2>
                <p>{"Location lists and niche information you upload remain yours. You grant us the \
                     right to process them to generate content for you. Generated pages are yours to \
                     publish and edit."}</p>
            </section>

            <section>
                <h2>{"4. Acceptable Use"}</h2>
                <ul>
                    <li>{"Do not use the service to generate misleading, illegal or infringing content"}</li>
                    <li>{"Do not attempt to resell or share your beta access"}</li>
                    <li>{"Do not probe, overload or disrupt the service"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. No Ranking Guarantees"}</h2>
                <p>{"Search rankings depend on many factors outside our control. We provide tooling \
                     to make your content unique and locally relevant; we do not and cannot \
                     guarantee any specific search engine outcome."}</p>
            </section>

            <section>
                <h2>{"6. Disclaimer of Warranties"}</h2>
                <p>{"The service is provided \"as is\" without warranty of any kind, express or \
                     implied, including fitness for a particular purpose."}</p>
            </section>

            <section>
                <h2>{"7. Limitation of Liability"}</h2>
                <p>{"To the maximum extent permitted by law, we are not liable for indirect, \
                     incidental or consequential damages arising from your use of the service."}</p>
            </section>

            <section>
                <h2>{"8. Termination"}</h2>
                <p>{"You may stop using the service at any time. We may suspend or terminate beta \
                     accounts that violate these terms."}</p>
            </section>

            <section>
                <h2>{"9. Changes to These Terms"}</h2>
                <p>{"We may update these terms during the beta. Material changes will be announced \
                     by email to registered beta members."}</p>
            </section>

            <section>
                <h2>{"10. Governing Law"}</h2>
                <p>{"These terms are governed by the laws of the State of Delaware, United States."}</p>
            </section>

            <section>
                <h2>{"11. Contact Us"}</h2>
                <p>{"Questions about these terms? Email us at legal@seoscribed.com."}</p>
            </section>

            <div class="legal-links">
                <Link<Route> to={Route::Home}>{"Back to home"}</Link<Route>>
                <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            </div>
        </div>
    }
}

const LEGAL_CSS: &str = r#"
.legal-content {
    max-width: 44rem;
    margin: 0 auto;
    padding: 4rem 1.5rem 5rem;
    font-family: 'Inter', system-ui, -apple-system, sans-serif;
    color: #1E293B;
}
.legal-content h1 { font-size: 2rem; font-weight: 700; color: #0F172A; margin-bottom: 0.5rem; }
.legal-updated { color: #94A3B8; font-size: 0.85rem; margin-bottom: 2.5rem; }
.legal-content section { margin-bottom: 2rem; }
.legal-content h2 { font-size: 1.15rem; font-weight: 700; color: #0F172A; margin-bottom: 0.6rem; }
.legal-content p { color: #475569; line-height: 1.7; }
.legal-content ul { list-style: disc; padding-left: 1.5rem; color: #475569; line-height: 1.7; }
.legal-links { display: flex; gap: 1.5rem; margin-top: 3rem; }
.legal-links a { color: #C2410C; font-weight: 600; text-decoration: none; }
.legal-links a:hover { text-decoration: underline; }
"#;
