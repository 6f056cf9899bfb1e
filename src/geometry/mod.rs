use num_traits::Float;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_euclidean() {
        assert_eq!(euclidean(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(euclidean(1.0, 1.0, 1.0, 1.0), 0.0);
    }

    #[test]
    fn test_squared_euclidean() {
        assert_eq!(squared_euclidean(0.0, 0.0, 3.0, 4.0), 25.0);
    }
}
