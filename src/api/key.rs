use crate::info;

pub async fn key() -> &'static str {
    info!("Key endpoint hit");
    "success"
}
