// Domain layer: the WorkOrder entity.

pub mod model;
