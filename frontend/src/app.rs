use crate::components::lead_form::LeadFormComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main class="page">
                <section class="page-section">
                    <h1 class="page-title">{ "121 selah - Finding home Tour!" }</h1>
                    <LeadFormComponent />
                    <div class="page-footer">
                        <p>{ "Powered by Straqa" }</p>
                    </div>
                </section>
            </main>
        }
    }
}
