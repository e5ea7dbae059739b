use leptos::prelude::*;

const OLIST_DATASET_URL: &str =
    "https://www.kaggle.com/datasets/olistbr/brazilian-ecommerce";
const INFLATION_DATASET_URL: &str =
    "https://www.kaggle.com/datasets/lucashmateo/brazil-inflation-data";
const FULLSCREEN_DASHBOARD_URL: &str = "https://app.powerbi.com/view?r=eyJrIjoiNmExYmQyNDktYjhkNi00ZWI2LTkyOWUtZGM5ZTdmNzVmNjlkIiwidCI6IjkwYWZmZTBmLWMyYTMtNDEwOC1iYjk4LTZjZWI0ZTk0ZWYxNSIsImMiOjEwfQ%3D%3D";

#[component]
pub fn LinksPage() -> impl IntoView {
    view! {
        <div class="page page--links">
            <h1>"🔗 Links"</h1>

            <p>"References for this project:"</p>
            <ul class="links__list">
                <li>
                    <a href=OLIST_DATASET_URL target="_blank" rel="noopener">
                        "📂 Olist source dataset (Kaggle)"
                    </a>
                </li>
                <li>
                    <a href=INFLATION_DATASET_URL target="_blank" rel="noopener">
                        "📂 Brazil inflation source dataset (Kaggle)"
                    </a>
                </li>
                <li>
                    <a href=FULLSCREEN_DASHBOARD_URL target="_blank" rel="noopener">
                        "📈 Full-screen dashboard"
                    </a>
                </li>
            </ul>
        </div>
    }
}
