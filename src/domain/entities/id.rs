use crate::application::app_error::AppError;
use std::marker::PhantomData;

#[derive(Debug)]
pub struct Id<T> {
    pub value: i64,
    _marker: PhantomData<T>
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData
        }
    }
}

// Manual impls so `T` itself does not need to be `Clone`/`PartialEq`.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Id::new(self.value)
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let id = value
            .parse::<i64>()
            .map_err(|e| AppError::InvalidId(format!("Invalid id `{}`: {}", value, e)))?;
        if id < 1 {
            return Err(AppError::InvalidId(format!("Invalid id `{}`: must be positive", value)));
        }
        Ok(Id::new(id))
    }
}
