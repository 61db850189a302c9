use serde::{Deserialize, Serialize};

/// An RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Serialize as the space-separated triple X3D attributes expect.
    pub fn to_x3d(&self) -> String {
        format!("{} {} {}", self.r, self.g, self.b)
    }
}

impl From<(f64, f64, f64)> for Rgb {
    fn from((r, g, b): (f64, f64, f64)) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_x3d_triple() {
        assert_eq!(Rgb::new(1.0, 0.65, 0.0).to_x3d(), "1 0.65 0");
        assert_eq!(Rgb::BLACK.to_x3d(), "0 0 0");
    }

    #[test]
    fn test_from_tuple() {
        let c: Rgb = (0.2, 0.4, 0.6).into();
        assert_eq!(c, Rgb::new(0.2, 0.4, 0.6));
    }
}
