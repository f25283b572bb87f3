//! Engine enums passed by value through the C API.
//!
//! Script passes these as plain integers. Decoding validates the
//! discriminant, so a native function never sees an invalid variant.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// An engine enum that travels as an `i32`.
pub trait EngineEnum:
    Copy + Default + TryFromPrimitive<Primitive = i32> + Into<i32> + 'static
{
    const NAME: &'static str;
}

macro_rules! engine_enums {
    ($(
        $(#[$meta:meta])*
        $name:ident { $first:ident = $first_value:literal $(, $variant:ident = $value:literal)* $(,)? }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, TryFromPrimitive)]
            #[repr(i32)]
            pub enum $name {
                #[default]
                $first = $first_value,
                $($variant = $value,)*
            }

            impl EngineEnum for $name {
                const NAME: &'static str = stringify!($name);
            }
        )*
    };
}

engine_enums! {
    CameraProjectionType { Perspective = 0, Orthographic = 1 }

    CameraMode { Mono = 0, Stereo = 1 }

    DeadZoneMode { Circular = 0, Independent = 1 }

    /// Selects which [`TimeStepPolicy`](super::TimeStepPolicy) fields apply.
    TimeStepPolicyType {
        ThrottleFrameRate = 0,
        Smoothing = 1,
        ExternalStepRange = 2,
        SystemStepRange = 3,
        DebugStep = 4,
        ClearHistory = 5,
    }

    WindowKeystrokes { WindowsKey = 0, AltTab = 1, AltEnter = 2, AltF4 = 3 }

    AnimationBoneRootMode {
        Ignore = 0,
        DeltaPosition = 1,
        DeltaRotation = 2,
        DeltaTransform = 3,
    }

    /// What happens to particles whose emitting unit is destroyed.
    OrphanedParticlePolicy { Destroy = 0, Unlink = 1 }
}
