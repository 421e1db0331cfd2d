// Domain layer: the notification capability, the delivery record and the sink port.

pub mod model;
pub mod ports;
