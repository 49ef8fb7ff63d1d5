pub mod email_details;
pub mod email_record;
pub mod parsed_email;
