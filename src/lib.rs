//! Server-rendered index page of the mail triage form.

pub mod app;
pub mod components;
pub mod types;

pub use app::App;
pub use types::PageProps;

use yew::ServerRenderer;

/// Render the full HTML document for the index page.
pub async fn render_page(props: PageProps) -> String {
    let body = ServerRenderer::<App>::with_props(move || props)
        .hydratable(false)
        .render()
        .await;

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>Mail Triage</title>\n</head>\n<body style=\"margin:0;\">\n{}\n</body>\n</html>\n",
        body
    )
}
