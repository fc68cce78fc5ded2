use entity::prelude::*;

pub mod blueprint;

pub trait Agent {
    type Item;
    fn prompt(
        self,
        request: &GenerationRequest,
    ) -> impl std::future::Future<Output = Self::Item> + Send;
}
