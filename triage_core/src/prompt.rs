/// Reply the model must give for automated mail (newsletters, spam, no-reply notifications).
pub const NO_REPLY_NEEDED: &str = "No reply needed. Recommendation: Archive.";

/// Build the fixed analysis prompt around the email text.
///
/// The email is embedded verbatim. The tag values and JSON keys must stay in
/// sync with the serde names in [`crate::types`].
pub fn build_prompt(email_text: &str) -> String {
    format!(
        r#"
Analyse this received email:
"{email_text}"

--- REPLY RULES ---
1. PRODUCTIVE (problems, questions, requests): write a formal reply that resolves the request.
2. SOCIAL (compliments, congratulations, greetings): write a short, polite and empathetic reply.
3. AUTOMATED (advertising, spam, no-reply, social network notifications): the suggested reply must be ONLY: "{no_reply}"
-------------------

Tasks:
1. Classify: 'Produtivo' or 'Improdutivo'.
2. Sentiment: 'Feliz', 'Neutro' or 'Irritado'.
3. Urgency: 'Alta', 'Média' or 'Baixa'.
4. Extraction: list key data with a short context (document numbers, amounts, dates).
5. Summary: one short sentence.

Answer EXACTLY with this JSON:
{{
    "classificacao": "Produtivo/Improdutivo",
    "sentimento": "Feliz/Neutro/Irritado",
    "urgencia": "Alta/Média/Baixa",
    "dados_chave": ["Data 1", "Data 2"],
    "resumo": "...",
    "resposta_sugerida": "..."
}}
"#,
        email_text = email_text,
        no_reply = NO_REPLY_NEEDED,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_email_verbatim() {
        let email = "Please check my invoice #123, I was charged twice";
        let prompt = build_prompt(email);
        assert!(prompt.contains(&format!("\"{}\"", email)));
    }

    #[test]
    fn test_prompt_names_every_output_key() {
        let prompt = build_prompt("hi");
        for key in [
            "classificacao",
            "sentimento",
            "urgencia",
            "dados_chave",
            "resumo",
            "resposta_sugerida",
        ] {
            assert!(prompt.contains(key), "missing key {}", key);
        }
        assert!(prompt.contains(NO_REPLY_NEEDED));
    }
}
