use alloc::vec::Vec;
use core::ops::{Add, AddAssign, Mul};

use k256::{
    elliptic_curve::{
        generic_array::GenericArray,
        group::{
            ff::{Field, PrimeField},
            Group,
        },
        sec1::{EncodedPoint, FromEncodedPoint, ToEncodedPoint},
        FieldBytesSize,
    },
    Secp256k1,
};
use zeroize::DefaultIsZeroes;

pub(crate) type BackendScalar = k256::Scalar;
pub(crate) type BackendPoint = k256::ProjectivePoint;

/// SEC1 point-encoding family used for public keys on the wire.
///
/// The encoding is a fixed deployment contract: a public key is only
/// accepted at exactly this encoding's length, and results are produced
/// in the same encoding. It is never auto-detected from the data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointFormat {
    /// Compressed encoding: a tag byte and the x-coordinate (33 bytes).
    Compressed,
    /// Uncompressed encoding: a tag byte and both coordinates (65 bytes).
    Uncompressed,
}

impl PointFormat {
    /// The exact length in bytes of a public key in this encoding.
    pub const fn encoded_len(self) -> usize {
        match self {
            Self::Compressed => 33,
            Self::Uncompressed => 65,
        }
    }

    fn is_compressed(self) -> bool {
        matches!(self, Self::Compressed)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) struct Scalar(BackendScalar);

impl Scalar {
    /// Decodes a scalar from its 32-byte big-endian representation.
    ///
    /// Only canonical representations are accepted: returns `None`
    /// if the encoded integer is not below the group order.
    pub fn try_from_be_bytes(bytes: &[u8; 32]) -> Option<Self> {
        let arr = GenericArray::<u8, FieldBytesSize<Secp256k1>>::from(*bytes);
        Option::from(BackendScalar::from_repr(arr)).map(Self)
    }

    /// The 32-byte big-endian representation, left-padded with zeros.
    pub fn to_be_bytes(self) -> [u8; 32] {
        self.0.to_bytes().into()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero().into()
    }

    pub fn mul_by_generator(&self) -> Point {
        Point::GENERATOR * self
    }
}

impl DefaultIsZeroes for Scalar {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Point(BackendPoint);

impl Point {
    pub const GENERATOR: Self = Self(BackendPoint::GENERATOR);

    /// Decodes a point from its SEC1 representation.
    ///
    /// Returns `None` for byte sequences that are not a well-formed SEC1
    /// encoding, encode coordinates that do not satisfy the curve
    /// equation, or encode the identity (a valid public key is never
    /// the identity).
    pub fn try_from_sec1_bytes(bytes: &[u8]) -> Option<Self> {
        let ep = EncodedPoint::<Secp256k1>::from_bytes(bytes).ok()?;
        if ep.is_identity() {
            return None;
        }
        Option::from(BackendPoint::from_encoded_point(&ep)).map(Self)
    }

    /// The SEC1 representation in the given encoding.
    ///
    /// Must not be called on the identity; decoding rejects it and the
    /// derivation operations report it as an error instead of encoding it.
    pub fn to_sec1_bytes(self, format: PointFormat) -> Vec<u8> {
        self.0
            .to_affine()
            .to_encoded_point(format.is_compressed())
            .as_bytes()
            .to_vec()
    }

    pub fn is_identity(&self) -> bool {
        self.0.is_identity().into()
    }
}

impl AddAssign<&Scalar> for Scalar {
    fn add_assign(&mut self, other: &Scalar) {
        self.0 += &other.0
    }
}

impl Add<Scalar> for Scalar {
    type Output = Scalar;

    fn add(self, other: Scalar) -> Scalar {
        Scalar(self.0.add(&other.0))
    }
}

impl Add<&Scalar> for &Scalar {
    type Output = Scalar;

    fn add(self, other: &Scalar) -> Scalar {
        Scalar(self.0.add(&other.0))
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point(self.0.add(&(other.0)))
    }
}

impl Add<&Point> for &Point {
    type Output = Point;

    fn add(self, other: &Point) -> Point {
        Point(self.0.add(&(other.0)))
    }
}

impl Mul<&Scalar> for Point {
    type Output = Point;

    fn mul(self, other: &Scalar) -> Point {
        Point(self.0.mul(&(other.0)))
    }
}

#[cfg(test)]
mod tests {
    use k256::elliptic_curve::{bigint::Encoding, Curve};
    use k256::Secp256k1;

    use super::{Point, PointFormat, Scalar};

    const G_COMPRESSED: &str = "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798";
    const G_UNCOMPRESSED: &str = "0479be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798\
                                  483ada7726a3c4655da4fbfc0e1108a8fd17b448a68554199c47d08ffb10d4b8";

    #[test]
    fn scalar_rejects_non_canonical_representations() {
        let order = Secp256k1::ORDER.to_be_bytes();
        assert!(Scalar::try_from_be_bytes(&order).is_none());
        assert!(Scalar::try_from_be_bytes(&[0xff; 32]).is_none());

        let order_minus_one = Secp256k1::ORDER
            .wrapping_sub(&k256::elliptic_curve::bigint::U256::ONE)
            .to_be_bytes();
        let scalar = Scalar::try_from_be_bytes(&order_minus_one).unwrap();
        assert_eq!(scalar.to_be_bytes(), order_minus_one);
    }

    #[test]
    fn scalar_bytes_round_trip() {
        let mut bytes = [0u8; 32];
        bytes[31] = 0x2a;
        let scalar = Scalar::try_from_be_bytes(&bytes).unwrap();
        assert!(!scalar.is_zero());
        assert_eq!(scalar.to_be_bytes(), bytes);
    }

    #[test]
    fn point_sec1_round_trip() {
        let compressed = hex::decode(G_COMPRESSED).unwrap();
        let uncompressed = hex::decode(G_UNCOMPRESSED).unwrap();

        let point = Point::try_from_sec1_bytes(&compressed).unwrap();
        assert_eq!(point, Point::GENERATOR);
        assert_eq!(point.to_sec1_bytes(PointFormat::Compressed), compressed);
        assert_eq!(point.to_sec1_bytes(PointFormat::Uncompressed), uncompressed);

        let point = Point::try_from_sec1_bytes(&uncompressed).unwrap();
        assert_eq!(point.to_sec1_bytes(PointFormat::Uncompressed), uncompressed);
    }

    #[test]
    fn point_rejects_identity_encoding() {
        // SEC1 encodes the identity as a single zero byte.
        assert!(Point::try_from_sec1_bytes(&[0x00]).is_none());
    }

    #[test]
    fn point_rejects_off_curve_coordinates() {
        // x = 5: x^3 + 7 is not a quadratic residue modulo the field prime.
        let mut bad = [0u8; 33];
        bad[0] = 0x02;
        bad[32] = 0x05;
        assert!(Point::try_from_sec1_bytes(&bad).is_none());
    }
}
