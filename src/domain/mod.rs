// Domain layer: the item value type, report snapshots and the tracking port.

pub mod model;
pub mod ports;
