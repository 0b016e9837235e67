pub const MV_PER_V: f32 = 1000.0;
pub const V_PER_MV: f32 = 1.0 / MV_PER_V;
