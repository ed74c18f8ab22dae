use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    squared_euclidean(x1, y1, x2, y2).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where 
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// Location of a node on the map image, in pixels
/// `top` grows downwards, `left` grows to the right
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {

    pub fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }

    /// Straight-line distance to `other`
    pub fn distance(&self, other: &Position) -> f64 {
        euclidean(self.top, self.left, other.top, other.left)
    }

    pub fn squared_distance(&self, other: &Position) -> f64 {
        squared_euclidean(self.top, self.left, other.top, other.left)
    }
}

impl From<(f64, f64)> for Position {
    fn from((top, left): (f64, f64)) -> Self {
        Self { top, left }
    }
}
