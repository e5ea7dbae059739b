use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InfoTab {
    Background,
    Data,
    Architecture,
}

impl InfoTab {
    const ALL: [InfoTab; 3] = [InfoTab::Background, InfoTab::Data, InfoTab::Architecture];

    fn label(&self) -> &'static str {
        match self {
            InfoTab::Background => "Background",
            InfoTab::Data => "Data & Case Study",
            InfoTab::Architecture => "System Architecture",
        }
    }
}

#[component]
pub fn InfoPage() -> impl IntoView {
    let (active_tab, set_active_tab) = signal(InfoTab::Background);

    view! {
        <div class="page page--info">
            <h1>"ℹ️ Project Information"</h1>

            <div class="info__tab-bar">
                {InfoTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="info__tab"
                                class:info__tab--active=move || active_tab.get() == tab
                                on:click=move |_| set_active_tab.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || active_tab.get() == InfoTab::Background>
                <section class="info__section">
                    <h2>"Background & Goals"</h2>
                    <p>
                        "The growth of e-commerce in Brazil produces a large and complex volume of \
                         transaction data. Olist, as the largest platform, keeps its data split \
                         across many relational tables. Sales performance cannot be analyzed in \
                         isolation: external factors such as "
                        <strong>"currency inflation"</strong>
                        " directly affect purchasing power, so both have to be read together."
                    </p>
                </section>
            </Show>

            <Show when=move || active_tab.get() == InfoTab::Data>
                <section class="info__section">
                    <h2>"Data Description"</h2>
                    <p>"The project combines two sources so sales and macro-economics can be correlated."</p>

                    <div class="info__columns">
                        <div class="info__column">
                            <h3>"1. Primary dataset (Olist)"</h3>
                            <p><strong>"Source:"</strong>" Kaggle (2016-2018)"</p>
                            <p><strong>"Volume:"</strong>" ±100,000 rows"</p>
                            <details>
                                <summary>"The 8 relational tables"</summary>
                                <ol>
                                    <li><strong>"Orders"</strong>": order status facts."</li>
                                    <li><strong>"Order Items"</strong>": line items per order."</li>
                                    <li><strong>"Payments"</strong>": payment methods."</li>
                                    <li><strong>"Reviews"</strong>": customer reviews."</li>
                                    <li><strong>"Sellers"</strong>": seller identities."</li>
                                    <li><strong>"Customers"</strong>": customer locations."</li>
                                    <li><strong>"Products"</strong>": product categories and dimensions."</li>
                                    <li><strong>"Geolocation"</strong>": postal code data."</li>
                                </ol>
                            </details>
                        </div>
                        <div class="info__column">
                            <h3>"2. Supporting dataset"</h3>
                            <p><strong>"Source:"</strong>" StatBureau / Kaggle"</p>
                            <p><strong>"Kind:"</strong>" time series (consumer price index)"</p>
                            <p>
                                "Reflects the fluctuation of the Brazilian Real (BRL) and is used to \
                                 read the macro-economic conditions over the transaction period."
                            </p>
                        </div>
                    </div>
                </section>
            </Show>

            <Show when=move || active_tab.get() == InfoTab::Architecture>
                <section class="info__section">
                    <h2>"System Architecture"</h2>
                    <p>"Two pipeline styles feed the same warehouse; this application only reads their output."</p>

                    <div class="info__columns">
                        <div class="info__column">
                            <h3>"1. ETL pipeline"</h3>
                            <p class="info__caption">"Compute load: client side"</p>
                            <ul>
                                <li><strong>"Extract:"</strong>" load the CSVs into a local data lake."</li>
                                <li>
                                    <strong>"Transform:"</strong>
                                    " impute missing values, handle inflation outliers (IQR method), \
                                     unpivot the inflation series."
                                </li>
                                <li><strong>"Load:"</strong>" store the cleaned tables in the warehouse."</li>
                            </ul>
                        </div>
                        <div class="info__column">
                            <h3>"2. ELT pipeline"</h3>
                            <p class="info__caption">"Compute load: database engine"</p>
                            <ul>
                                <li><strong>"Extract & Load:"</strong>" land the raw data directly in the database."</li>
                                <li>
                                    <strong>"Transform:"</strong>
                                    " CREATE TABLE AS SELECT, indexes on the staging tables, \
                                     feature engineering in SQL."
                                </li>
                            </ul>
                        </div>
                    </div>

                    <hr />

                    <h3>"Feature Engineering"</h3>
                    <ul>
                        <li><strong>"delivery_days"</strong>": days between purchase and delivery."</li>
                        <li><strong>"is_late"</strong>": 0/1 flag for deliveries past the estimate."</li>
                        <li><strong>"freight_ratio"</strong>": freight cost relative to the order total."</li>
                        <li><strong>"volatility_metrics"</strong>": standard deviation of inflation as an economic stability signal."</li>
                    </ul>
                </section>
            </Show>
        </div>
    }
}
