//! 强类型索引向量，按 `VertexId` / `EdgeId` 访问顶点表、边表与各算法的逐顶点状态。
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Trait implemented by identifier types that can index into [`IndexVec`].
pub trait Idx: Copy + Eq + PartialEq + Ord + fmt::Debug {
    fn index(self) -> usize;
    fn from_usize(idx: usize) -> Self;
}

/// A vector indexed by strongly typed identifiers.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IndexVec<I, T> {
    data: Vec<T>,
    _marker: PhantomData<I>,
}

impl<I, T> IndexVec<I, T>
where
    I: Idx,
{
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// One copy of `value` per index in `0..len`, used for per-vertex
    /// algorithm state such as `visited` or `key`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; len])
    }

    pub fn from_fn(len: usize, mut f: impl FnMut(I) -> T) -> Self {
        Self::from_vec((0..len).map(|idx| f(I::from_usize(idx))).collect())
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            data,
            _marker: PhantomData,
        }
    }

    pub fn push(&mut self, value: T) -> I {
        let idx = self.data.len();
        self.data.push(value);
        I::from_usize(idx)
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = I> + use<I, T> {
        (0..self.data.len()).map(I::from_usize)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_enumerated(&self) -> impl Iterator<Item = (I, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(idx, value)| (I::from_usize(idx), value))
    }

    pub fn get(&self, index: I) -> Option<&T> {
        self.data.get(index.index())
    }

}

impl<I, T> Default for IndexVec<I, T>
where
    I: Idx,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<I, T> fmt::Debug for IndexVec<I, T>
where
    I: Idx,
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter_enumerated()).finish()
    }
}

impl<I, T> Index<I> for IndexVec<I, T>
where
    I: Idx,
{
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.data[index.index()]
    }
}

impl<I, T> IndexMut<I> for IndexVec<I, T>
where
    I: Idx,
{
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.data[index.index()]
    }
}

impl<I, T> FromIterator<T> for IndexVec<I, T>
where
    I: Idx,
{
    fn from_iter<It: IntoIterator<Item = T>>(iter: It) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, I, T> IntoIterator for &'a IndexVec<I, T>
where
    I: Idx,
{
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ids::VertexId;

    #[test]
    fn push_returns_sequential_ids() {
        let mut vec: IndexVec<VertexId, &str> = IndexVec::new();
        assert!(vec.is_empty());
        assert_eq!(vec.push("a"), VertexId::new(0));
        assert_eq!(vec.push("b"), VertexId::new(1));
        assert_eq!(vec[VertexId::new(1)], "b");
        assert_eq!(vec.indices().collect::<Vec<_>>(), vec![VertexId::new(0), VertexId::new(1)]);
    }

    #[test]
    fn from_elem_fills_every_slot() {
        let visited: IndexVec<VertexId, bool> = IndexVec::from_elem(false, 3);
        assert_eq!(visited.len(), 3);
        assert!(visited.iter().all(|seen| !seen));
        assert!(visited.get(VertexId::new(3)).is_none());
    }

    #[test]
    fn clear_keeps_nothing() {
        let mut names: IndexVec<VertexId, &str> = ["A", "B"].into_iter().collect();
        assert!(!names.is_empty());
        names.clear();
        assert!(names.is_empty());
        assert_eq!(names.indices().count(), 0);
    }
}
