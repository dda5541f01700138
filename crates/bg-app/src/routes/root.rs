//! Version banner endpoint.

use crate::BANNER;

/// GET /: the deployed version banner as plain text.
pub async fn banner() -> &'static str {
    BANNER
}
