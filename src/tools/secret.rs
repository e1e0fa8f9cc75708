use core::{
    fmt::Debug,
    ops::{Add, AddAssign},
};

use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox};
use zeroize::Zeroize;

use crate::curve::{Point, Scalar};

/// A helper wrapper for managing secret values.
///
/// On top of `secrecy::SecretBox` functionality, it provides:
/// - Safe `Clone` implementation (without needing to impl `CloneableSecret`)
/// - Safe `Debug` implementation
pub(crate) struct Secret<T: Zeroize>(SecretBox<T>);

impl<T> Secret<T>
where
    T: Zeroize,
{
    pub fn expose_secret(&self) -> &T {
        self.0.expose_secret()
    }

    pub fn expose_secret_mut(&mut self) -> &mut T {
        self.0.expose_secret_mut()
    }
}

impl<T> Secret<T>
where
    T: Zeroize + Clone,
{
    pub fn init_with(ctr: impl FnOnce() -> T) -> Self {
        Self(SecretBox::init_with(ctr))
    }

    pub fn try_init_with<E>(ctr: impl FnOnce() -> Result<T, E>) -> Result<Self, E> {
        Ok(Self(SecretBox::try_init_with(ctr)?))
    }
}

impl<T> Clone for Secret<T>
where
    T: Zeroize + Clone,
{
    fn clone(&self) -> Self {
        Self::init_with(|| self.0.expose_secret().clone())
    }
}

impl<T> Debug for Secret<T>
where
    T: Zeroize,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Secret<{}>(...)", core::any::type_name::<T>())
    }
}

impl<'a, T: Zeroize + AddAssign<&'a T>> AddAssign<&'a T> for Secret<T> {
    fn add_assign(&mut self, other: &'a T) {
        self.expose_secret_mut().add_assign(other);
    }
}

impl<'a, T: Zeroize + AddAssign<&'a T>> AddAssign<&'a Secret<T>> for Secret<T> {
    fn add_assign(&mut self, other: &'a Secret<T>) {
        self.add_assign(other.expose_secret());
    }
}

impl<'a, T: Zeroize + AddAssign<&'a T>> Add<&'a T> for Secret<T> {
    type Output = Secret<T>;

    fn add(mut self, other: &'a T) -> Self::Output {
        self += other;
        self
    }
}

impl<'a, T: Zeroize + AddAssign<&'a T>> Add<&'a Secret<T>> for Secret<T> {
    type Output = Secret<T>;

    fn add(mut self, other: &'a Secret<T>) -> Self::Output {
        self += other.expose_secret();
        self
    }
}

impl Secret<Scalar> {
    pub fn mul_by_generator(&self) -> Point {
        self.expose_secret().mul_by_generator()
    }
}
