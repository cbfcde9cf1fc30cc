use crate::domain::PosClass;

/// Returns exactly one class per input token, in order.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<PosClass>;
}
