use crate::GrowVec;
use core::marker::PhantomData;
use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

impl<T: Serialize> Serialize for GrowVec<T> {
    /// Serializes a `GrowVec` as a sequence of its `len` elements.
    ///
    /// Slack capacity is not part of the encoding.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de> + Default> Deserialize<'de> for GrowVec<T> {
    /// Deserializes a `GrowVec` from a sequence.
    ///
    /// When the format reports a length hint the capacity is reserved up
    /// front; otherwise it follows the usual doubling growth.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct GrowVecVisitor<T> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de> + Default> Visitor<'de> for GrowVecVisitor<T> {
            type Value = GrowVec<T>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = match seq.size_hint() {
                    Some(hint) => GrowVec::with_capacity(hint),
                    None => GrowVec::new(),
                };

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(GrowVecVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{GrowVec, growvec};

    #[test]
    fn growvec_json() {
        let v: GrowVec<_> = growvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn growvec_json_empty() {
        let v: GrowVec<i32> = growvec![];
        let s = serde_json::to_string(&v).unwrap();
        let r: GrowVec<i32> = serde_json::from_str(&s).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.capacity(), 0);
    }

    #[test]
    fn growvec_json_ignores_slack() {
        let mut v: GrowVec<_> = growvec![1, 2, 3, 4];
        v.resize(2);
        v.reserve(16);
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2]");
    }
}
