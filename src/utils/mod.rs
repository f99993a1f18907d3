pub mod queues;
pub mod random;
