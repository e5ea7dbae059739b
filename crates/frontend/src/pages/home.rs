use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page page--home">
            <h1>"🏠 Welcome"</h1>

            <h3>"Big Data Reporting Application"</h3>
            <p>
                "This application monitors the performance of the "
                <strong>"Olist e-commerce platform"</strong>
                " together with the macro-economic indicator that shapes it: "
                <strong>"Brazilian inflation"</strong>
                "."
            </p>

            <p>"Use the menu on the left to navigate:"</p>
            <ul>
                <li><strong>"Dashboard"</strong>": interactive visualization of the ETL output plus a live table browser."</li>
                <li><strong>"Info"</strong>": project background, datasets, and the system architecture (ETL vs ELT)."</li>
                <li><strong>"Links"</strong>": source datasets and references."</li>
            </ul>
        </div>
    }
}
