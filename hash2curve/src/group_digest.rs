//! Traits for handling hash to curve.

use core::{fmt, marker::PhantomData};

use tracing::debug;

use crate::{Curve, Dst, ExpandMsg, FieldHasher, MapToCurve, Result, Sswu, hash_to_field};

/// A ciphersuite: the curve, its map and the domain separation tag.
///
/// Built once and shared by reference by [`HashToCurve`] and
/// [`EncodeToCurve`].
pub struct Suite<'a, C: Curve, X> {
    curve: C,
    mapper: Sswu<C::FieldElement, C::Isogeny>,
    dst: Dst<'a>,
    _expander: PhantomData<X>,
}

impl<'a, C: Curve, X: ExpandMsg> Suite<'a, C, X> {
    /// Build the map for `curve`, going through [`Curve::isogeny`] when the
    /// curve has `A == 0` or `B == 0`.
    ///
    /// # Errors
    /// [`Error::Configuration`](crate::Error::Configuration) if the curve
    /// parameters are not suitable for the Simplified SWU map.
    pub fn new(curve: C, dst: Dst<'a>) -> Result<Self> {
        let mapper = Sswu::with_isogeny(curve.equation(), curve.z(), || curve.isogeny())?;
        debug!(
            isogenous = mapper.is_isogenous(),
            dst_len = dst.len(),
            "hash to curve suite ready"
        );
        Ok(Self {
            curve,
            mapper,
            dst,
            _expander: PhantomData,
        })
    }

    /// The curve collaborator.
    pub fn curve(&self) -> &C {
        &self.curve
    }

    /// The map from field elements to curve points.
    pub fn mapper(&self) -> &Sswu<C::FieldElement, C::Isogeny> {
        &self.mapper
    }

    /// The domain separation tag.
    pub fn dst(&self) -> &Dst<'a> {
        &self.dst
    }

    /// Hash the concatenation of `msg` to `N` base field elements.
    ///
    /// # Errors
    /// See [`hash_to_field`].
    pub fn hash_to_field<const N: usize>(&self, msg: &[&[u8]]) -> Result<[C::FieldElement; N]> {
        hash_to_field::<N, X, C::FieldElement>(msg, &self.dst)
    }

    /// Map `u` to a point of the target curve, without clearing the cofactor.
    ///
    /// # Errors
    /// [`Error::Arithmetic`](crate::Error::Arithmetic) if the curve
    /// collaborator rejects the result.
    pub fn map_to_curve(&self, u: &C::FieldElement) -> Result<C::Point> {
        let (x, y) = self.mapper.map_to_curve(u)?;
        self.curve.new_point(&x, &y)
    }

    /// The random oracle encoding.
    pub fn hash_to_curve(&self) -> HashToCurve<'_, C, X> {
        HashToCurve { suite: self }
    }

    /// The nonuniform encoding.
    pub fn encode_to_curve(&self) -> EncodeToCurve<'_, C, X> {
        EncodeToCurve { suite: self }
    }

    /// Select the encoding.
    pub fn encoder(&self, random_oracle: bool) -> Encoder<'_, C, X> {
        if random_oracle {
            Encoder::HashToCurve(self.hash_to_curve())
        } else {
            Encoder::EncodeToCurve(self.encode_to_curve())
        }
    }

    /// `hash_to_field` into the base field with this suite's tag.
    pub fn field_hasher(&self) -> FieldHasher<'a, C::FieldElement, X> {
        FieldHasher::new(self.dst)
    }

    /// `hash_to_field` into the scalar field with this suite's tag.
    pub fn scalar_hasher(&self) -> FieldHasher<'a, C::Scalar, X> {
        FieldHasher::new(self.dst)
    }
}

impl<C: Curve, X> fmt::Debug for Suite<'_, C, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Suite")
            .field("curve", &self.curve)
            .field("mapper", &self.mapper)
            .field("dst", &self.dst)
            .finish()
    }
}

/// Hash arbitrary byte sequences to a valid group element.
pub trait HashToPoint {
    /// The curve collaborator.
    type Curve: Curve;

    /// The `expand_message` variant.
    type ExpandMsg: ExpandMsg;

    /// Is the output indistinguishable from a random oracle?
    fn is_random_oracle(&self) -> bool;

    /// Hash the concatenation of `msg` to a point.
    ///
    /// # Errors
    /// When the chosen [`ExpandMsg`] implementation or a collaborator returns
    /// an error.
    fn hash_slices(&self, msg: &[&[u8]]) -> Result<<Self::Curve as Curve>::Point>;

    /// Hash `msg` to a point.
    ///
    /// # Errors
    /// See [`HashToPoint::hash_slices`].
    fn hash(&self, msg: &[u8]) -> Result<<Self::Curve as Curve>::Point> {
        self.hash_slices(&[msg])
    }

    /// The curve collaborator.
    fn curve(&self) -> &Self::Curve;

    /// `hash_to_field` into the scalar field of the curve, with the same tag.
    fn hash_to_scalar(&self) -> FieldHasher<'_, <Self::Curve as Curve>::Scalar, Self::ExpandMsg>;
}

/// Computes the hash to curve routine.
///
/// From <https://www.rfc-editor.org/rfc/rfc9380.html>:
///
/// > Uniform encoding from byte strings to points in G.
/// > That is, the distribution of its output is statistically close
/// > to uniform in G.
/// > This function is suitable for most applications requiring a random
/// > oracle returning points in G assuming a cryptographically secure
/// > hash function is used.
///
/// For the `expand_message` call, `len_in_bytes = <C::FieldElement as FromOkm>::Length * 2`.
///
/// [`FromOkm`]: crate::FromOkm
pub struct HashToCurve<'a, C: Curve, X> {
    suite: &'a Suite<'a, C, X>,
}

impl<C: Curve, X: ExpandMsg> HashToPoint for HashToCurve<'_, C, X> {
    type Curve = C;
    type ExpandMsg = X;

    fn is_random_oracle(&self) -> bool {
        true
    }

    fn hash_slices(&self, msg: &[&[u8]]) -> Result<C::Point> {
        let [u0, u1] = self.suite.hash_to_field::<2>(msg)?;
        let q0 = self.suite.map_to_curve(&u0)?;
        let q1 = self.suite.map_to_curve(&u1)?;
        let curve = self.suite.curve();
        Ok(curve.clear_cofactor(&curve.add_points(&q0, &q1)))
    }

    fn curve(&self) -> &C {
        self.suite.curve()
    }

    fn hash_to_scalar(&self) -> FieldHasher<'_, C::Scalar, X> {
        self.suite.scalar_hasher()
    }
}

/// Computes the encode to curve routine.
///
/// From <https://www.rfc-editor.org/rfc/rfc9380.html>:
///
/// > Nonuniform encoding from byte strings to
/// > points in G. That is, the distribution of its output is not
/// > uniformly random in G: the set of possible outputs of
/// > encode_to_curve is only a fraction of the points in G, and some
/// > points in this set are more likely to be output than others.
///
/// For the `expand_message` call, `len_in_bytes = <C::FieldElement as FromOkm>::Length`.
///
/// [`FromOkm`]: crate::FromOkm
pub struct EncodeToCurve<'a, C: Curve, X> {
    suite: &'a Suite<'a, C, X>,
}

impl<C: Curve, X: ExpandMsg> HashToPoint for EncodeToCurve<'_, C, X> {
    type Curve = C;
    type ExpandMsg = X;

    fn is_random_oracle(&self) -> bool {
        false
    }

    fn hash_slices(&self, msg: &[&[u8]]) -> Result<C::Point> {
        let [u] = self.suite.hash_to_field::<1>(msg)?;
        let q = self.suite.map_to_curve(&u)?;
        Ok(self.suite.curve().clear_cofactor(&q))
    }

    fn curve(&self) -> &C {
        self.suite.curve()
    }

    fn hash_to_scalar(&self) -> FieldHasher<'_, C::Scalar, X> {
        self.suite.scalar_hasher()
    }
}

/// Either encoding, chosen at configuration time.
pub enum Encoder<'a, C: Curve, X> {
    /// Random oracle encoding.
    HashToCurve(HashToCurve<'a, C, X>),
    /// Nonuniform encoding.
    EncodeToCurve(EncodeToCurve<'a, C, X>),
}

impl<C: Curve, X: ExpandMsg> HashToPoint for Encoder<'_, C, X> {
    type Curve = C;
    type ExpandMsg = X;

    fn is_random_oracle(&self) -> bool {
        match self {
            Self::HashToCurve(h) => h.is_random_oracle(),
            Self::EncodeToCurve(e) => e.is_random_oracle(),
        }
    }

    fn hash_slices(&self, msg: &[&[u8]]) -> Result<C::Point> {
        match self {
            Self::HashToCurve(h) => h.hash_slices(msg),
            Self::EncodeToCurve(e) => e.hash_slices(msg),
        }
    }

    fn curve(&self) -> &C {
        match self {
            Self::HashToCurve(h) => h.curve(),
            Self::EncodeToCurve(e) => e.curve(),
        }
    }

    fn hash_to_scalar(&self) -> FieldHasher<'_, C::Scalar, X> {
        match self {
            Self::HashToCurve(h) => h.hash_to_scalar(),
            Self::EncodeToCurve(e) => e.hash_to_scalar(),
        }
    }
}

macro_rules! impl_encoder_boilerplate {
    ($($name:ident),+) => {
        $(
            impl<C: Curve, X> Clone for $name<'_, C, X> {
                fn clone(&self) -> Self {
                    *self
                }
            }

            impl<C: Curve, X> Copy for $name<'_, C, X> {}

            impl<C: Curve, X> fmt::Debug for $name<'_, C, X> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.debug_tuple(stringify!($name)).field(self.suite).finish()
                }
            }
        )+
    };
}

impl_encoder_boilerplate!(HashToCurve, EncodeToCurve);

impl<C: Curve, X> Clone for Encoder<'_, C, X> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Curve, X> Copy for Encoder<'_, C, X> {}

impl<C: Curve, X> fmt::Debug for Encoder<'_, C, X> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HashToCurve(h) => fmt::Debug::fmt(h, f),
            Self::EncodeToCurve(e) => fmt::Debug::fmt(e, f),
        }
    }
}
