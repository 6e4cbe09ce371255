//! Multipart resume uploads.
//!
//! Accepts `.txt`, `.pdf` and `.docx` by file name. Plain text and `.docx`
//! are read as lossy UTF-8; `.docx` is not unpacked. PDF text goes through
//! `pdf-extract`.

use std::collections::HashMap;

use axum::body::Bytes;
use axum::extract::Multipart;
use tracing::{debug, warn};

use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeFormat {
    Txt,
    Pdf,
    Docx,
}

impl ResumeFormat {
    pub fn from_file_name(file_name: &str) -> Result<Self, AppError> {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".txt") {
            Ok(ResumeFormat::Txt)
        } else if lower.ends_with(".pdf") {
            Ok(ResumeFormat::Pdf)
        } else if lower.ends_with(".docx") {
            Ok(ResumeFormat::Docx)
        } else {
            Err(AppError::UnsupportedMediaType(format!(
                "{file_name}: please upload a .txt, .pdf, or .docx file"
            )))
        }
    }
}

/// Text fields and the decoded resume from one multipart request.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub resume_text: String,
    fields: HashMap<String, String>,
}

impl ResumeUpload {
    pub fn field(&self, key: &str) -> Option<String> {
        self.fields
            .get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn required_field(&self, key: &str) -> Result<String, AppError> {
        self.field(key)
            .ok_or_else(|| AppError::Validation(format!("{key} is required")))
    }
}

/// Reads every part of the request. The first part carrying a file name is
/// the resume; all other parts are text fields.
pub async fn read_resume_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut fields = HashMap::new();
    let mut file: Option<(String, String)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        match field.file_name().map(str::to_string) {
            Some(file_name) if file.is_none() => {
                let format = ResumeFormat::from_file_name(&file_name)?;
                let bytes = field.bytes().await.map_err(multipart_error)?;
                debug!("Received resume upload {file_name} ({} bytes)", bytes.len());
                file = Some((file_name, decode_resume(format, bytes).await?));
            }
            Some(_) => {} // extra files are ignored
            None => {
                let value = field.text().await.map_err(multipart_error)?;
                fields.insert(name, value);
            }
        }
    }

    let (file_name, resume_text) =
        file.ok_or_else(|| AppError::Validation("a resume file is required".to_string()))?;

    if resume_text.trim().is_empty() {
        return Err(AppError::Validation(format!("{file_name} contains no text")));
    }

    Ok(ResumeUpload {
        file_name,
        resume_text,
        fields,
    })
}

/// PDF extraction is CPU-bound and can panic on malformed input, so it runs
/// on the blocking pool; a panic there is reported as unreadable input.
pub async fn decode_resume(format: ResumeFormat, bytes: Bytes) -> Result<String, AppError> {
    match format {
        ResumeFormat::Txt | ResumeFormat::Docx => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        ResumeFormat::Pdf => {
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
                .await
                .map_err(|e| {
                    warn!("PDF extraction task failed: {e}");
                    AppError::UnprocessableEntity("Could not read PDF resume".to_string())
                })?
                .map_err(|e| {
                    AppError::UnprocessableEntity(format!("Could not read PDF resume: {e}"))
                })
        }
    }
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::Validation(format!("Invalid multipart body: {e}"))
}

#[cfg(test)]
pub mod test_support {
    /// One-page PDF whose content stream uses a font but declares no
    /// `/Resources`. Xref offsets are computed so the file parses.
    pub fn page_without_resources_pdf() -> Vec<u8> {
        let content = "BT /F1 12 Tf 72 720 Td (Hello) Tj ET";
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] /Contents 4 0 R >>"
                .to_string(),
            format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ),
        ];

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::page_without_resources_pdf;
    use super::*;

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ResumeFormat::from_file_name("cv.txt").unwrap(), ResumeFormat::Txt);
        assert_eq!(ResumeFormat::from_file_name("CV.PDF").unwrap(), ResumeFormat::Pdf);
        assert_eq!(ResumeFormat::from_file_name("cv.docx").unwrap(), ResumeFormat::Docx);
    }

    #[test]
    fn test_unknown_extension_is_unsupported() {
        for name in ["cv.doc", "cv.png", "cv", "txt"] {
            assert!(matches!(
                ResumeFormat::from_file_name(name),
                Err(AppError::UnsupportedMediaType(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_text_decoding_is_lossy() {
        let text = decode_resume(ResumeFormat::Txt, Bytes::from_static(b"Rust \xFF dev"))
            .await
            .unwrap();
        assert!(text.starts_with("Rust "));
        assert!(text.ends_with(" dev"));
    }

    #[tokio::test]
    async fn test_invalid_pdf_is_unprocessable() {
        let err = decode_resume(ResumeFormat::Pdf, Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }

    #[tokio::test]
    async fn test_pdf_without_resources_is_unprocessable() {
        let err = decode_resume(ResumeFormat::Pdf, Bytes::from(page_without_resources_pdf()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::UnprocessableEntity(_)));
    }
}
