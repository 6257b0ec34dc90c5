use crate::error::Exception;

/// What a single handler invocation produced.
///
/// `Ok(Some(_))` short-circuits the chain, `Ok(None)` declines, and `Err(_)`
/// is a failure inside the handler itself.
pub type HandlerResult = Result<Option<String>, Exception>;

/// Conversion from a handler's return value into a [`HandlerResult`].
pub trait Outcome {
  fn into_outcome(self) -> HandlerResult;
}

impl Outcome for () {
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    Ok(None)
  }
}

impl Outcome for String {
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    Ok(Some(self))
  }
}

impl Outcome for &'static str {
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    Ok(Some(self.to_owned()))
  }
}

impl Outcome for Option<String> {
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    Ok(self)
  }
}

impl Outcome for Option<&'static str> {
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    Ok(self.map(str::to_owned))
  }
}

impl<T> Outcome for Result<T, Exception>
where
  T: Outcome,
{
  #[inline]
  fn into_outcome(self) -> HandlerResult {
    self.and_then(T::into_outcome)
  }
}
