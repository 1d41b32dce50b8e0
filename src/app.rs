use yew::prelude::*;

use crate::components::{AnalysisForm, HistoryView, ResultView};
use crate::types::PageProps;

#[function_component(App)]
pub fn app(props: &PageProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:row; min-height:100vh; font-family:Arial,sans-serif;">
            <div style="width:380px; min-width:380px; padding:1.5em; background:#f8f9fa; border-right:1px solid #ddd; display:flex; flex-direction:column; gap:1em;">
                <h1 style="margin:0 0 0.5em 0; color:#333;">{ "Mail Triage" }</h1>
                <AnalysisForm />
                <HistoryView entries={props.history.clone()} />
            </div>
            <div style="flex:1; display:flex; flex-direction:column; padding:1.5em; gap:1em; overflow-y:auto;">
                { match &props.result {
                    Some(result) => html! { <ResultView result={result.clone()} /> },
                    None => html! {
                        <div style="flex:1; display:flex; align-items:center; justify-content:center; color:#888; font-size:1.2em;">
                            { "Paste an email or upload a file and click Analyse to see the result" }
                        </div>
                    },
                }}
            </div>
        </div>
    }
}
