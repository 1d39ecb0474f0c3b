use urlencoding::encode;

/// Host's WhatsApp number
const CONTACT_PHONE: &str = "5541991567448";

/// Canned opener for questions about the party
pub const CONTACT_MESSAGE: &str =
    "Muito bom o seu formulário Henrique, mas queria tirar uma dúvida contigo sobre:";

/// WhatsApp deep link pre-filled with `message`
pub fn contact_link(message: &str) -> String {
    format!("https://wa.me/{}?text={}", CONTACT_PHONE, encode(message))
}
