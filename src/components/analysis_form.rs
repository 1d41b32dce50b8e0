use yew::prelude::*;

/// Upload and text form posted back to `/`.
///
/// Field names are the ones the server reads: `email_text` and `email_file`.
#[function_component(AnalysisForm)]
pub fn analysis_form() -> Html {
    html! {
        <form method="post" action="/" enctype="multipart/form-data" style="display:flex; flex-direction:column; gap:1em;">
            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label for="email_text" style="font-weight:bold; color:#555;">{ "Email text:" }</label>
                <textarea
                    id="email_text"
                    name="email_text"
                    rows=10
                    placeholder="Paste the email here..."
                    style="width:100%; resize:vertical; padding:0.5em; box-sizing:border-box; border:1px solid #ccc; border-radius:4px;"
                />
            </div>
            <div style="display:flex; flex-direction:column; gap:0.5em;">
                <label for="email_file" style="font-weight:bold; color:#555;">{ "Or upload a file (.pdf, .txt):" }</label>
                <input
                    type="file"
                    id="email_file"
                    name="email_file"
                    accept=".pdf,.txt"
                    style="width:100%; padding:0.5em; border:1px solid #ccc; border-radius:4px;"
                />
                <small style="color:#888;">{ "When a file is uploaded, its text is analysed instead of the text above." }</small>
            </div>
            <button
                type="submit"
                style="width:100%; padding:0.7em 0; font-size:1em; background:#007bff; color:white; border:none; border-radius:4px; cursor:pointer;"
            >
                { "Analyse email" }
            </button>
        </form>
    }
}
