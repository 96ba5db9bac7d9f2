//! `Reflect` implementations for standard library types

use std::rc::Rc;
use std::sync::Arc;

use super::{Kind, Reflect};

macro_rules! impl_reflect_kind {
    ($kind:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl Reflect for $ty {
                fn kind(&self) -> Kind {
                    Kind::$kind
                }
            }
        )+
    };
}

impl_reflect_kind!(Bool => bool);
impl_reflect_kind!(Int => i8, i16, i32, i64, i128, isize);
impl_reflect_kind!(Uint => u8, u16, u32, u64, u128, usize);
impl_reflect_kind!(Float => f32, f64);
impl_reflect_kind!(Char => char);
impl_reflect_kind!(String => String, &str);
impl_reflect_kind!(Unit => ());

impl<T> Reflect for Option<T> {
    fn kind(&self) -> Kind {
        Kind::Option
    }
}

impl<T> Reflect for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn kind(&self) -> Kind {
        Kind::Sequence
    }
}

macro_rules! impl_reflect_pointer {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ptr {
                fn kind(&self) -> Kind {
                    Kind::Pointer
                }

                fn elem(&self) -> Option<&dyn Reflect> {
                    Some(&**self)
                }
            }
        )+
    };
}

impl_reflect_pointer!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);
