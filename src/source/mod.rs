//! Payload input.
//!
//! Reads the payload bytes from a file or piped stdin and decides what kind of
//! body they hold. Parsing happens here, at the boundary, so the rest of the
//! crate only ever sees a [`Payload`].

use crate::model::error::InputError;
use crate::model::{style_headers, ImageItem, Payload, PayloadBody};
use crate::view_state::compute_luminance;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Load the payload body and optional headers file.
///
/// Without `file`, the body is read from stdin, which must be piped.
///
/// # Errors
///
/// - [`InputError::FileNotFound`] if either path does not exist
/// - [`InputError::NoInput`] if no file is given and stdin is a terminal
/// - [`InputError::ImageDecode`] if the bytes have an image signature but do
///   not decode
/// - [`InputError::Io`] for other read failures
pub fn load(file: Option<&Path>, headers: Option<&Path>) -> Result<Payload, InputError> {
    let bytes = match file {
        Some(path) => read_file(path)?,
        None => read_stdin()?,
    };

    let body = classify_body(&bytes)?;
    let headers = headers.map(read_headers).transpose()?;

    Ok(Payload::new(headers, body))
}

/// Decide whether `bytes` are an image, JSON, or plain text.
///
/// Image detection goes by file signature. Anything that is not an image
/// and parses as JSON is JSON; everything else is shown as (lossy) text.
///
/// # Errors
///
/// Returns [`InputError::ImageDecode`] when a recognised image signature is
/// followed by undecodable data.
pub fn classify_body(bytes: &[u8]) -> Result<PayloadBody, InputError> {
    if let Ok(format) = image::guess_format(bytes) {
        let decoded = image::load_from_memory_with_format(bytes, format)?.to_rgba8();
        let luminance = compute_luminance(&decoded);
        info!(
            ?format,
            width = decoded.width(),
            height = decoded.height(),
            ?luminance,
            "Payload classified as image"
        );
        return Ok(PayloadBody::Image(ImageItem::new(decoded, luminance)));
    }

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(bytes) {
        info!(bytes = bytes.len(), "Payload classified as JSON");
        return Ok(PayloadBody::Json(value));
    }

    debug!(bytes = bytes.len(), "Payload is not JSON, showing as text");
    Ok(PayloadBody::Text(String::from_utf8_lossy(bytes).into_owned()))
}

/// Read a headers file of `Name: value` lines into styled text.
///
/// # Errors
///
/// Returns [`InputError::FileNotFound`] or [`InputError::Io`].
pub fn read_headers(path: &Path) -> Result<ratatui::text::Text<'static>, InputError> {
    let bytes = read_file(path)?;
    Ok(style_headers(&String::from_utf8_lossy(&bytes)))
}

fn read_file(path: &Path) -> Result<Vec<u8>, InputError> {
    if !path.exists() {
        return Err(InputError::FileNotFound {
            path: PathBuf::from(path),
        });
    }
    Ok(std::fs::read(path)?)
}

fn read_stdin() -> Result<Vec<u8>, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::NoInput);
    }
    read_all(stdin.lock())
}

fn read_all(mut reader: impl Read) -> Result<Vec<u8>, InputError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::fs;
    use std::io::Cursor;

    fn png_bytes(image: &RgbaImage) -> Vec<u8> {
        let mut out = Cursor::new(Vec::new());
        image
            .write_to(&mut out, ImageFormat::Png)
            .expect("encode png");
        out.into_inner()
    }

    // ===== classify_body =====

    #[test]
    fn json_object_is_classified_as_json() {
        let body = classify_body(br#"{"a": 1}"#).unwrap();
        assert!(matches!(body, PayloadBody::Json(v) if v["a"] == 1));
    }

    #[test]
    fn json_keeps_document_key_order() {
        let body = classify_body(br#"{"z": 1, "a": 2}"#).unwrap();
        let PayloadBody::Json(value) = body else {
            panic!("expected JSON");
        };
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn non_json_is_classified_as_text() {
        let body = classify_body(b"hello {world").unwrap();
        assert_eq!(body, PayloadBody::Text("hello {world".to_string()));
    }

    #[test]
    fn invalid_utf8_text_is_decoded_lossily() {
        let body = classify_body(&[b'o', b'k', 0xff]).unwrap();
        assert_eq!(body, PayloadBody::Text("ok\u{fffd}".to_string()));
    }

    #[test]
    fn png_is_classified_as_image() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, 255]));
        let body = classify_body(&png_bytes(&image)).unwrap();

        let PayloadBody::Image(item) = body else {
            panic!("expected image");
        };
        assert_eq!(item.image().dimensions(), (3, 2));
        assert_eq!(item.luminance(), None, "opaque images need no background");
    }

    #[test]
    fn translucent_png_gets_luminance() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([255, 255, 255, 255]));
        image.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        let body = classify_body(&png_bytes(&image)).unwrap();

        let PayloadBody::Image(item) = body else {
            panic!("expected image");
        };
        let luminance = item.luminance().expect("has transparency");
        assert!(luminance > 0.9, "white pixel dominates, got {luminance}");
    }

    #[test]
    fn truncated_png_is_a_decode_error() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 255]));
        let mut bytes = png_bytes(&image);
        bytes.truncate(20);

        let result = classify_body(&bytes);
        assert!(matches!(result, Err(InputError::ImageDecode(_))));
    }

    // ===== file reading =====

    #[test]
    fn load_reads_body_and_headers_from_files() {
        let dir = std::env::temp_dir();
        let body_path = dir.join("payview_test_load_body.json");
        let headers_path = dir.join("payview_test_load_headers.txt");
        fs::write(&body_path, r#"["x"]"#).unwrap();
        fs::write(&headers_path, "Content-Type: application/json\n").unwrap();

        let result = load(Some(&body_path), Some(&headers_path));
        let _ = fs::remove_file(&body_path);
        let _ = fs::remove_file(&headers_path);

        let payload = result.unwrap();
        assert!(matches!(payload.body(), PayloadBody::Json(_)));
        let headers = payload.headers().expect("headers present");
        assert_eq!(headers.lines.len(), 1);
    }

    #[test]
    fn load_missing_file_reports_path() {
        let path = Path::new("/nonexistent/payview/body.json");
        let result = load(Some(path), None);

        match result {
            Err(InputError::FileNotFound { path: reported }) => {
                assert_eq!(reported, PathBuf::from(path));
            }
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn read_all_collects_reader_contents() {
        let bytes = read_all(Cursor::new(b"plain".to_vec())).unwrap();
        assert_eq!(bytes, b"plain");
    }
}
