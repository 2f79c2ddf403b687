pub mod artifact;
pub mod container;
pub mod deploy;
pub mod expiring;
pub mod load_balancer;
pub mod machine;
pub mod mesos;
pub mod protobuf;
pub mod request;
pub mod sandbox;
pub mod shell;
pub mod task;
pub mod webhook;
