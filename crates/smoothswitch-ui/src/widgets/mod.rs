pub mod smooth_switch;
