pub mod mailer;
pub mod ses;
