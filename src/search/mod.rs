// 探索モジュール

pub mod dfs;

pub use dfs::solve;
