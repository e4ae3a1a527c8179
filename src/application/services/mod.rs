mod flow_controller;
mod order_state_holder;

pub use flow_controller::FlowController;
pub use order_state_holder::OrderStateHolder;
