//! Text extraction from uploaded email files.
//!
//! PDFs are parsed page by page; everything else is read as UTF-8 text.
//! Failures never escape: they come back as a readable message that the
//! pipeline analyses like any other text.

use anyhow::{Context, Result};

/// Prefix of the message returned in place of text when a file can't be read.
pub const READ_ERROR_PREFIX: &str = "Error reading file: ";

/// Lowercased extension of `filename`, including the leading dot.
///
/// Returns an empty string when the name has no extension. A leading dot
/// alone (".bashrc") does not count as an extension.
pub fn extension_of(filename: &str) -> String {
    let name = filename.rsplit(|c| c == '/' || c == '\\').next().unwrap_or(filename);
    match name.rfind('.') {
        Some(idx) if idx > 0 => name[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// Extract the text content of an uploaded file.
///
/// `extension` is expected in the form returned by [`extension_of`].
pub fn extract_text(bytes: &[u8], extension: &str) -> String {
    let extracted = if extension == ".pdf" {
        extract_pdf(bytes)
    } else {
        extract_plaintext(bytes)
    };

    match extracted {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(extension, error = %format!("{:#}", e), "failed to read uploaded file");
            format!("{}{:#}", READ_ERROR_PREFIX, e)
        }
    }
}

fn extract_plaintext(bytes: &[u8]) -> Result<String> {
    let text = std::str::from_utf8(bytes).context("file is not valid UTF-8")?;
    Ok(text.to_string())
}

fn extract_pdf(bytes: &[u8]) -> Result<String> {
    // pdf-extract can panic on malformed input
    let pages = std::panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| anyhow::anyhow!("PDF parser panicked (malformed file)"))?
        .context("could not parse PDF")?;

    // Pages without extractable text come back empty and add nothing.
    Ok(pages.concat())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal PDF with one line of Helvetica text per page.
    fn pdf_with_pages(texts: &[&str]) -> Vec<u8> {
        let page_count = texts.len();
        let font_id = 3 + 2 * page_count;
        let kids: Vec<String> = (0..page_count).map(|i| format!("{} 0 R", 3 + 2 * i)).collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!("<< /Type /Pages /Kids [{}] /Count {} >>", kids.join(" "), page_count),
        ];
        for (i, text) in texts.iter().enumerate() {
            let content = format!("BT /F1 24 Tf 72 700 Td ({}) Tj ET", text);
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {} 0 R >> >> /Contents {} 0 R >>",
                font_id,
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{}\nendstream",
                content.len(),
                content
            ));
        }
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, object) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, object).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{:010} 00000 n \n", offset));
        }
        xref.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
            objects.len() + 1,
            xref_at
        ));
        pdf.extend_from_slice(xref.as_bytes());
        pdf
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("invoice.PDF"), ".pdf");
        assert_eq!(extension_of("mail.txt"), ".txt");
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of(".bashrc"), "");
        assert_eq!(extension_of("C:\\mail\\note.Txt"), ".txt");
    }

    #[test]
    fn test_plaintext_is_returned_as_is() {
        let text = "Olá,\nplease check invoice #123.\n";
        assert_eq!(extract_text(text.as_bytes(), ".txt"), text);
        assert_eq!(extract_text(text.as_bytes(), ""), text);
    }

    #[test]
    fn test_invalid_utf8_becomes_error_string() {
        let out = extract_text(&[0x66, 0x6f, 0xff, 0xfe], ".txt");
        assert!(out.starts_with(READ_ERROR_PREFIX), "got: {}", out);
        assert!(out.contains("UTF-8"));
    }

    #[test]
    fn test_pdf_pages_are_read_in_order() {
        let pdf = pdf_with_pages(&["HelloPageOne", "SecondPage"]);
        let out = extract_text(&pdf, ".pdf");

        assert!(!out.starts_with(READ_ERROR_PREFIX), "got: {}", out);
        let first = out.find("HelloPageOne").expect("page one text");
        let second = out.find("SecondPage").expect("page two text");
        assert!(first < second, "pages out of order: {:?}", out);
    }

    #[test]
    fn test_malformed_pdf_becomes_error_string() {
        let out = extract_text(b"this is not a pdf at all", ".pdf");
        assert!(out.starts_with(READ_ERROR_PREFIX), "got: {}", out);
    }

    #[test]
    fn test_empty_pdf_bytes_become_error_string() {
        let out = extract_text(&[], ".pdf");
        assert!(out.starts_with(READ_ERROR_PREFIX));
    }
}
