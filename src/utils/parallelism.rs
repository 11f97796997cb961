//! Iteration which is parallel if the `parallel` feature is enabled and sequential otherwise.
//! Both variants preserve the order of the items when collected.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub mod prelude {
    pub use super::MaybeParallelRefIterator;
    #[cfg(feature = "parallel")]
    pub use rayon::iter::ParallelIterator;
}

pub trait MaybeParallelRefIterator<'data> {
    type Item: 'data;
    #[cfg(feature = "parallel")]
    type Iter: IndexedParallelIterator<Item = &'data Self::Item>;
    #[cfg(not(feature = "parallel"))]
    type Iter: Iterator<Item = &'data Self::Item>;

    fn maybe_par_iter(&'data self) -> Self::Iter;
}

impl<'data, T: Sync + 'data> MaybeParallelRefIterator<'data> for [T] {
    type Item = T;
    #[cfg(feature = "parallel")]
    type Iter = rayon::slice::Iter<'data, T>;
    #[cfg(not(feature = "parallel"))]
    type Iter = std::slice::Iter<'data, T>;

    fn maybe_par_iter(&'data self) -> Self::Iter {
        #[cfg(feature = "parallel")]
        {
            self.par_iter()
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.iter()
        }
    }
}
