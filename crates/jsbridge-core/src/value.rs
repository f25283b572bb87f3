//! The bridge's view of script values.
//!
//! [`ScriptValue`] is the minimal capability set the bridge needs from a
//! script environment: create values of each kind, read properties and array
//! elements, attach native user data to an object, and invoke a function. An
//! embedding maps these onto its engine's own handles.
//!
//! Numbers follow the script model: every number is an `f64`, and the
//! [`is_int`](ScriptValue::is_int) / [`is_uint`](ScriptValue::is_uint)
//! predicates classify integral values the way the host environment does.
//!
//! Arrays, objects and functions have reference semantics. Cloning a
//! `ScriptValue` that holds one of them shares the referent.

use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bitflags::bitflags;

use crate::error::{PropertyError, ScriptException};

bitflags! {
    /// Attributes attached to an object property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct PropertyAttributes: u8 {
        /// Script writes are rejected.
        const READ_ONLY = 1 << 0;
        /// Hidden from key enumeration.
        const DONT_ENUM = 1 << 1;
        /// Script deletes are rejected.
        const DONT_DELETE = 1 << 2;
    }
}

// ============================================================================
// ScriptValue
// ============================================================================

/// A script value as seen from the native side of the boundary.
#[derive(Clone, Default)]
pub enum ScriptValue {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(Rc<str>),
    Array(ScriptArray),
    Object(ScriptObject),
    Function(ScriptFunction),
}

impl ScriptValue {
    /// Human-readable name of this value's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            ScriptValue::Undefined => "undefined",
            ScriptValue::Null => "null",
            ScriptValue::Bool(_) => "bool",
            ScriptValue::Number(_) => "number",
            ScriptValue::String(_) => "string",
            ScriptValue::Array(_) => "array",
            ScriptValue::Object(_) => "object",
            ScriptValue::Function(_) => "function",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, ScriptValue::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScriptValue::Null)
    }

    /// True for both `null` and `undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, ScriptValue::Undefined | ScriptValue::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, ScriptValue::Bool(_))
    }

    /// True for integral numbers representable as `i32`.
    pub fn is_int(&self) -> bool {
        match self {
            ScriptValue::Number(n) => {
                n.fract() == 0.0 && *n >= i32::MIN as f64 && *n <= i32::MAX as f64
            }
            _ => false,
        }
    }

    /// True for integral numbers representable as `u32`.
    pub fn is_uint(&self) -> bool {
        match self {
            ScriptValue::Number(n) => n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64,
            _ => false,
        }
    }

    /// True for any number.
    pub fn is_double(&self) -> bool {
        matches!(self, ScriptValue::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, ScriptValue::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, ScriptValue::Array(_))
    }

    /// True for objects, arrays and functions.
    pub fn is_object(&self) -> bool {
        matches!(
            self,
            ScriptValue::Object(_) | ScriptValue::Array(_) | ScriptValue::Function(_)
        )
    }

    pub fn is_function(&self) -> bool {
        matches!(self, ScriptValue::Function(_))
    }

    /// True for objects carrying native user data.
    pub fn is_user_created(&self) -> bool {
        matches!(self, ScriptValue::Object(o) if o.is_user_created())
    }

    // ------------------------------------------------------------------------
    // Coercing accessors
    // ------------------------------------------------------------------------

    /// Integer view. Booleans are 0/1, everything else non-numeric is 0.
    pub fn int_value(&self) -> i32 {
        match self {
            ScriptValue::Number(n) => *n as i32,
            ScriptValue::Bool(b) => *b as i32,
            _ => 0,
        }
    }

    /// Unsigned view. Negative numbers clamp to 0.
    pub fn uint_value(&self) -> u32 {
        match self {
            ScriptValue::Number(n) => *n as u32,
            ScriptValue::Bool(b) => *b as u32,
            _ => 0,
        }
    }

    pub fn double_value(&self) -> f64 {
        match self {
            ScriptValue::Number(n) => *n,
            ScriptValue::Bool(b) => *b as u8 as f64,
            _ => 0.0,
        }
    }

    /// Truthiness.
    pub fn bool_value(&self) -> bool {
        match self {
            ScriptValue::Undefined | ScriptValue::Null => false,
            ScriptValue::Bool(b) => *b,
            ScriptValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ScriptValue::String(s) => !s.is_empty(),
            ScriptValue::Array(_) | ScriptValue::Object(_) | ScriptValue::Function(_) => true,
        }
    }

    /// String contents, or the empty string for non-strings.
    pub fn string_value(&self) -> String {
        self.as_str().map(str::to_owned).unwrap_or_default()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ScriptValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScriptValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&ScriptArray> {
        match self {
            ScriptValue::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ScriptObject> {
        match self {
            ScriptValue::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&ScriptFunction> {
        match self {
            ScriptValue::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Length if this is an array.
    pub fn array_len(&self) -> Option<usize> {
        self.as_array().map(ScriptArray::len)
    }

    /// Element `index` of an array, `Undefined` otherwise.
    pub fn get_index(&self, index: usize) -> ScriptValue {
        self.as_array()
            .and_then(|a| a.get(index))
            .unwrap_or_default()
    }

    /// Property `key` of an object, `Undefined` otherwise.
    pub fn get_key(&self, key: &str) -> ScriptValue {
        self.as_object().and_then(|o| o.get(key)).unwrap_or_default()
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.as_object().is_some_and(|o| o.has(key))
    }
}

impl fmt::Debug for ScriptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptValue::Undefined => write!(f, "Undefined"),
            ScriptValue::Null => write!(f, "Null"),
            ScriptValue::Bool(v) => write!(f, "Bool({})", v),
            ScriptValue::Number(v) => write!(f, "Number({})", v),
            ScriptValue::String(s) => write!(f, "String({:?})", s),
            ScriptValue::Array(a) => f.debug_list().entries(a.to_vec()).finish(),
            ScriptValue::Object(o) => write!(f, "{:?}", o),
            ScriptValue::Function(func) => write!(f, "Function({})", func.name()),
        }
    }
}

impl PartialEq for ScriptValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScriptValue::Undefined, ScriptValue::Undefined) => true,
            (ScriptValue::Null, ScriptValue::Null) => true,
            (ScriptValue::Bool(a), ScriptValue::Bool(b)) => a == b,
            (ScriptValue::Number(a), ScriptValue::Number(b)) => a == b,
            (ScriptValue::String(a), ScriptValue::String(b)) => a == b,
            // Arrays compare element-wise, objects and functions by identity
            (ScriptValue::Array(a), ScriptValue::Array(b)) => {
                ScriptArray::ptr_eq(a, b) || a.to_vec() == b.to_vec()
            }
            (ScriptValue::Object(a), ScriptValue::Object(b)) => ScriptObject::ptr_eq(a, b),
            (ScriptValue::Function(a), ScriptValue::Function(b)) => ScriptFunction::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for ScriptValue {
    fn from(v: bool) -> Self {
        ScriptValue::Bool(v)
    }
}

impl From<f64> for ScriptValue {
    fn from(v: f64) -> Self {
        ScriptValue::Number(v)
    }
}

impl From<f32> for ScriptValue {
    fn from(v: f32) -> Self {
        ScriptValue::Number(v as f64)
    }
}

impl From<i32> for ScriptValue {
    fn from(v: i32) -> Self {
        ScriptValue::Number(v as f64)
    }
}

impl From<u32> for ScriptValue {
    fn from(v: u32) -> Self {
        ScriptValue::Number(v as f64)
    }
}

impl From<&str> for ScriptValue {
    fn from(v: &str) -> Self {
        ScriptValue::String(Rc::from(v))
    }
}

impl From<String> for ScriptValue {
    fn from(v: String) -> Self {
        ScriptValue::String(Rc::from(v))
    }
}

impl From<Vec<ScriptValue>> for ScriptValue {
    fn from(v: Vec<ScriptValue>) -> Self {
        ScriptValue::Array(ScriptArray::from(v))
    }
}

impl<const N: usize> From<[f64; N]> for ScriptValue {
    fn from(v: [f64; N]) -> Self {
        v.into_iter().map(ScriptValue::Number).collect::<ScriptArray>().into()
    }
}

impl From<ScriptArray> for ScriptValue {
    fn from(v: ScriptArray) -> Self {
        ScriptValue::Array(v)
    }
}

impl From<ScriptObject> for ScriptValue {
    fn from(v: ScriptObject) -> Self {
        ScriptValue::Object(v)
    }
}

impl From<ScriptFunction> for ScriptValue {
    fn from(v: ScriptFunction) -> Self {
        ScriptValue::Function(v)
    }
}

// ============================================================================
// ScriptArray
// ============================================================================

/// A shared, growable script array.
#[derive(Clone, Default)]
pub struct ScriptArray(Rc<RefCell<Vec<ScriptValue>>>);

impl ScriptArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// An array of `len` undefined elements.
    pub fn with_len(len: usize) -> Self {
        Self::from(vec![ScriptValue::Undefined; len])
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn get(&self, index: usize) -> Option<ScriptValue> {
        self.0.borrow().get(index).cloned()
    }

    /// Store `value` at `index`, growing with undefined elements as needed.
    pub fn set(&self, index: usize, value: ScriptValue) {
        let mut items = self.0.borrow_mut();
        if index >= items.len() {
            items.resize(index + 1, ScriptValue::Undefined);
        }
        items[index] = value;
    }

    pub fn push(&self, value: ScriptValue) {
        self.0.borrow_mut().push(value);
    }

    /// Snapshot of the elements.
    pub fn to_vec(&self) -> Vec<ScriptValue> {
        self.0.borrow().clone()
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl From<Vec<ScriptValue>> for ScriptArray {
    fn from(v: Vec<ScriptValue>) -> Self {
        Self(Rc::new(RefCell::new(v)))
    }
}

impl FromIterator<ScriptValue> for ScriptArray {
    fn from_iter<I: IntoIterator<Item = ScriptValue>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

// ============================================================================
// ScriptObject
// ============================================================================

struct Property {
    key: Rc<str>,
    value: ScriptValue,
    attributes: PropertyAttributes,
}

struct ObjectInner {
    properties: RefCell<Vec<Property>>,
    user_data: Option<Box<dyn Any>>,
}

/// A shared script object with ordered properties.
///
/// An object may carry native user data attached at creation. Such objects
/// are "user created"; the user data is dropped with the last reference.
#[derive(Clone)]
pub struct ScriptObject(Rc<ObjectInner>);

impl ScriptObject {
    pub fn new() -> Self {
        Self(Rc::new(ObjectInner {
            properties: RefCell::new(Vec::new()),
            user_data: None,
        }))
    }

    /// Create an object carrying `data` as its native user data.
    pub fn with_user_data<T: Any>(data: T) -> Self {
        Self(Rc::new(ObjectInner {
            properties: RefCell::new(Vec::new()),
            user_data: Some(Box::new(data)),
        }))
    }

    /// Builder-style native definition. Replaces any existing property.
    pub fn with_property(
        self,
        key: &str,
        value: impl Into<ScriptValue>,
        attributes: PropertyAttributes,
    ) -> Self {
        {
            let mut props = self.0.properties.borrow_mut();
            let value = value.into();
            match props.iter_mut().find(|p| &*p.key == key) {
                Some(p) => {
                    p.value = value;
                    p.attributes = attributes;
                }
                None => props.push(Property {
                    key: Rc::from(key),
                    value,
                    attributes,
                }),
            }
        }
        self
    }

    pub fn is_user_created(&self) -> bool {
        self.0.user_data.is_some()
    }

    /// The attached user data, if it is a `T`.
    pub fn user_data<T: Any>(&self) -> Option<&T> {
        self.0.user_data.as_deref().and_then(|d| d.downcast_ref::<T>())
    }

    pub fn get(&self, key: &str) -> Option<ScriptValue> {
        self.0
            .properties
            .borrow()
            .iter()
            .find(|p| &*p.key == key)
            .map(|p| p.value.clone())
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.properties.borrow().iter().any(|p| &*p.key == key)
    }

    pub fn attributes(&self, key: &str) -> Option<PropertyAttributes> {
        self.0
            .properties
            .borrow()
            .iter()
            .find(|p| &*p.key == key)
            .map(|p| p.attributes)
    }

    /// Native-side definition of `key` with explicit attributes.
    ///
    /// Redefining a read-only property fails.
    pub fn define(
        &self,
        key: &str,
        value: impl Into<ScriptValue>,
        attributes: PropertyAttributes,
    ) -> Result<(), PropertyError> {
        let mut props = self.0.properties.borrow_mut();
        match props.iter_mut().find(|p| &*p.key == key) {
            Some(p) if p.attributes.contains(PropertyAttributes::READ_ONLY) => {
                Err(PropertyError::ReadOnly(key.to_owned()))
            }
            Some(p) => {
                p.value = value.into();
                p.attributes = attributes;
                Ok(())
            }
            None => {
                props.push(Property {
                    key: Rc::from(key),
                    value: value.into(),
                    attributes,
                });
                Ok(())
            }
        }
    }

    /// Script-side assignment. Keeps the attributes of an existing property.
    pub fn set(&self, key: &str, value: impl Into<ScriptValue>) -> Result<(), PropertyError> {
        let mut props = self.0.properties.borrow_mut();
        match props.iter_mut().find(|p| &*p.key == key) {
            Some(p) if p.attributes.contains(PropertyAttributes::READ_ONLY) => {
                Err(PropertyError::ReadOnly(key.to_owned()))
            }
            Some(p) => {
                p.value = value.into();
                Ok(())
            }
            None => {
                props.push(Property {
                    key: Rc::from(key),
                    value: value.into(),
                    attributes: PropertyAttributes::empty(),
                });
                Ok(())
            }
        }
    }

    /// Script-side delete. Returns whether the property existed.
    pub fn delete(&self, key: &str) -> Result<bool, PropertyError> {
        let mut props = self.0.properties.borrow_mut();
        let Some(pos) = props.iter().position(|p| &*p.key == key) else {
            return Ok(false);
        };
        if props[pos].attributes.contains(PropertyAttributes::DONT_DELETE) {
            return Err(PropertyError::NotDeletable(key.to_owned()));
        }
        props.remove(pos);
        Ok(true)
    }

    /// Enumerable keys in definition order.
    pub fn keys(&self) -> Vec<Rc<str>> {
        self.0
            .properties
            .borrow()
            .iter()
            .filter(|p| !p.attributes.contains(PropertyAttributes::DONT_ENUM))
            .map(|p| Rc::clone(&p.key))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.properties.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.properties.borrow().is_empty()
    }

    /// Number of live references to this object.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Default for ScriptObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ScriptObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = self.0.properties.borrow();
        let mut map = f.debug_map();
        for p in props.iter() {
            map.entry(&p.key, &p.value);
        }
        map.finish()
    }
}

// ============================================================================
// ScriptFunction
// ============================================================================

/// Outcome of a handler invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum HandlerResult {
    /// The handler does not service this name.
    NotHandled,
    /// The call ran; either a value or an exception for the script.
    Handled(Result<ScriptValue, ScriptException>),
}

/// A native callback invoked when script calls a function value.
pub trait ScriptHandler {
    fn execute(&self, name: &str, args: &[ScriptValue]) -> HandlerResult;
}

struct FunctionInner {
    name: Rc<str>,
    handler: Rc<dyn ScriptHandler>,
}

/// A named script function backed by a native handler.
#[derive(Clone)]
pub struct ScriptFunction(Rc<FunctionInner>);

impl ScriptFunction {
    pub fn new<H>(name: &str, handler: H) -> Self
    where
        H: ScriptHandler + 'static,
    {
        Self::with_shared_handler(name, Rc::new(handler))
    }

    /// Create a function sharing an existing handler.
    pub fn with_shared_handler(name: &str, handler: Rc<dyn ScriptHandler>) -> Self {
        Self(Rc::new(FunctionInner {
            name: Rc::from(name),
            handler,
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Invoke the handler exactly as the script environment would.
    pub fn call(&self, args: &[ScriptValue]) -> HandlerResult {
        self.0.handler.execute(&self.0.name, args)
    }

    /// Invoke and collapse the outcome into a `Result`.
    pub fn invoke(&self, args: &[ScriptValue]) -> Result<ScriptValue, ScriptException> {
        match self.call(args) {
            HandlerResult::Handled(result) => result,
            HandlerResult::NotHandled => Err(ScriptException::new(format!(
                "{} is not a function",
                self.name()
            ))),
        }
    }

    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Debug for ScriptFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptFunction")
            .field("name", &self.name())
            .finish_non_exhaustive()
    }
}
