//! Thin shims that run on rayon with the `parallel` feature and sequentially
//! without it. Results are identical either way.

pub(crate) fn join<A, B, RA, RB>(oper_a: A, oper_b: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    #[cfg(feature = "parallel")]
    return rayon::join(oper_a, oper_b);

    #[cfg(not(feature = "parallel"))]
    return (oper_a(), oper_b());
}

#[cfg(feature = "parallel")]
pub(crate) fn par_map_collect<T, R, C>(
    v: impl rayon::prelude::IntoParallelIterator<Item = T>,
    f: impl Fn(T) -> R + Send + Sync,
) -> C
where
    T: Send + Sync,
    R: Send,
    C: rayon::prelude::FromParallelIterator<R>,
{
    use rayon::prelude::ParallelIterator;
    v.into_par_iter().map(f).collect()
}

#[cfg(not(feature = "parallel"))]
pub(crate) fn par_map_collect<T, R, C>(v: impl IntoIterator<Item = T>, f: impl Fn(T) -> R) -> C
where
    T: Send + Sync,
    R: Send,
    C: FromIterator<R>,
{
    v.into_iter().map(f).collect()
}
