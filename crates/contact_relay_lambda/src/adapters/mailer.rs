use contact_core::email::OutboundEmail;

pub trait EmailSender {
    fn send_email(&self, email: &OutboundEmail) -> Result<(), String>;
}
