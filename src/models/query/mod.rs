pub mod unread_query;
