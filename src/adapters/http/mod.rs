pub mod waitlist_client;
