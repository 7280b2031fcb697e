//! CAPTCHA image generation.

use captcha::{
    filters::{Noise, Wave},
    Captcha,
};
use tower_sessions::Session;

use crate::server::{error::AppError, middleware::session::CaptchaSession};

pub const CAPTCHA_LENGTH: u32 = 5;
const CAPTCHA_WIDTH: u32 = 220;
const CAPTCHA_HEIGHT: u32 = 120;

/// Characters drawn on the image. Glyphs that are easy to confuse (`0/O`, `1/l/I`) are left out.
const CAPTCHA_CHARS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', '2', '3', '4', '5', '6', '7', '8', '9',
];

/// A rendered CAPTCHA and the phrase it shows.
pub struct CaptchaImage {
    pub phrase: String,
    pub png: Vec<u8>,
}

/// Renders a distorted CAPTCHA image.
///
/// # Returns
/// - `Ok(CaptchaImage)` - PNG bytes with the matching phrase
/// - `Err(AppError::InternalError)` - PNG encoding failed
pub fn render() -> Result<CaptchaImage, AppError> {
    let mut captcha = Captcha::new();
    captcha
        .set_chars(CAPTCHA_CHARS)
        .add_chars(CAPTCHA_LENGTH)
        .apply_filter(Noise::new(0.2))
        .apply_filter(Wave::new(2.0, 10.0).horizontal())
        .apply_filter(Wave::new(2.0, 6.0).vertical())
        .view(CAPTCHA_WIDTH, CAPTCHA_HEIGHT);

    let phrase = captcha.chars_as_string();
    let png = captcha
        .as_png()
        .ok_or_else(|| AppError::InternalError("Failed to encode captcha image".to_string()))?;

    Ok(CaptchaImage { phrase, png })
}

pub struct CaptchaService<'a> {
    session: &'a Session,
}

impl<'a> CaptchaService<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Renders a new image and stores its phrase in the session.
    ///
    /// Any previously issued phrase is replaced.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PNG bytes
    /// - `Err(AppError)` - Rendering or session write failed
    pub async fn issue(&self) -> Result<Vec<u8>, AppError> {
        let image = render()?;

        CaptchaSession::new(self.session)
            .set_phrase(&image.phrase)
            .await?;

        Ok(image.png)
    }
}
