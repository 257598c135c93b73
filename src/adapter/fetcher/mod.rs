pub mod random_user;
