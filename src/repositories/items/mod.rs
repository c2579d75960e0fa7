pub mod item_repo;
