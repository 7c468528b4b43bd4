//! Class instances.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use super::Value;

#[derive(Debug)]
struct Instance {
    class_name: String,
    fields: RefCell<HashMap<String, Value>>,
}

/// A handle to an instance of a user class.
///
/// Cloning the handle aliases the instance; equality is identity.
#[derive(Clone, Debug)]
pub struct ObjectValue(Rc<Instance>);

impl ObjectValue {
    pub fn new(class_name: impl Into<String>) -> Self {
        ObjectValue(Rc::new(Instance {
            class_name: class_name.into(),
            fields: RefCell::new(HashMap::new()),
        }))
    }

    pub fn class_name(&self) -> &str {
        &self.0.class_name
    }

    pub fn field(&self, name: &str) -> Option<Value> {
        self.0.fields.borrow().get(name).cloned()
    }

    pub fn set_field(&self, name: impl Into<String>, value: Value) {
        self.0.fields.borrow_mut().insert(name.into(), value);
    }

    pub fn same_instance(&self, other: &ObjectValue) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ObjectValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_instance(other)
    }
}

impl fmt::Display for ObjectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} instance>", self.0.class_name)
    }
}
