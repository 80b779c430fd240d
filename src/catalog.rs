//! Built-in client API catalog.
//!
//! The standard HyperDex client call list and its parameter annotations.
//! This is the default schema the generator runs against when no JSON
//! schema is supplied; it is data, not behavior.

use lazy_static::lazy_static;

use crate::docs::AnnotationTable;
use crate::schema::ArgGroup::*;
use crate::schema::CallForm::{Iterator, OneShot};
use crate::schema::CallDescriptor;

lazy_static! {
    /// Every public call of the client object, in the order the generated
    /// listings and documentation present them.
    pub static ref CLIENT_CALLS: Vec<CallDescriptor> = {
        let mut calls = Vec::new();

        calls.push(CallDescriptor::new(
            "get", OneShot, &[SpaceName, Key], &[Status, Attributes]));
        calls.push(CallDescriptor::new(
            "put", OneShot, &[SpaceName, Key, Attributes], &[Status]));
        calls.push(CallDescriptor::new(
            "cond_put", OneShot, &[SpaceName, Key, Predicates, Attributes], &[Status]));
        calls.push(CallDescriptor::new(
            "put_if_not_exist", OneShot, &[SpaceName, Key, Attributes], &[Status]));
        calls.push(CallDescriptor::new(
            "del", OneShot, &[SpaceName, Key], &[Status]));
        calls.push(CallDescriptor::new(
            "cond_del", OneShot, &[SpaceName, Key, Predicates], &[Status]));

        // Numeric and bitwise read-modify-write on single attributes.
        for name in [
            "atomic_add", "atomic_sub", "atomic_mul", "atomic_div",
            "atomic_mod", "atomic_and", "atomic_or", "atomic_xor",
        ] {
            calls.push(CallDescriptor::new(
                name, OneShot, &[SpaceName, Key, Attributes], &[Status]));
        }

        for name in ["string_prepend", "string_append"] {
            calls.push(CallDescriptor::new(
                name, OneShot, &[SpaceName, Key, Attributes], &[Status]));
        }

        for name in ["list_lpush", "list_rpush"] {
            calls.push(CallDescriptor::new(
                name, OneShot, &[SpaceName, Key, Attributes], &[Status]));
        }

        for name in ["set_add", "set_remove", "set_intersect", "set_union"] {
            calls.push(CallDescriptor::new(
                name, OneShot, &[SpaceName, Key, Attributes], &[Status]));
        }

        // Map operations address (map attribute, map key) pairs.
        calls.push(CallDescriptor::new(
            "map_add", OneShot, &[SpaceName, Key, MapAttributes], &[Status]));
        calls.push(CallDescriptor::new(
            "map_remove", OneShot, &[SpaceName, Key, Attributes], &[Status]));
        for name in [
            "map_atomic_add", "map_atomic_sub", "map_atomic_mul", "map_atomic_div",
            "map_atomic_mod", "map_atomic_and", "map_atomic_or", "map_atomic_xor",
            "map_string_prepend", "map_string_append",
        ] {
            calls.push(CallDescriptor::new(
                name, OneShot, &[SpaceName, Key, MapAttributes], &[Status]));
        }

        calls.push(CallDescriptor::new(
            "search", Iterator, &[SpaceName, Predicates], &[Status, Attributes]));
        calls.push(CallDescriptor::new(
            "describe_search", OneShot, &[SpaceName, Predicates], &[Status, Description]));
        calls.push(CallDescriptor::new(
            "sorted_search", Iterator,
            &[SpaceName, Predicates, SortBy, Limit, MaxMin], &[Status, Attributes]));
        calls.push(CallDescriptor::new(
            "group_del", OneShot, &[SpaceName, Predicates], &[Status]));
        calls.push(CallDescriptor::new(
            "count", OneShot, &[SpaceName, Predicates], &[Status, Count]));

        calls
    };

    /// Parameter descriptions for every (form, group) pair the catalog's
    /// input groups use.
    pub static ref CLIENT_DOCS: AnnotationTable = {
        let mut docs = AnnotationTable::new();
        docs.insert((OneShot, SpaceName),
            "The name of the space as a string or buffer.");
        docs.insert((OneShot, Key),
            "The key for the operation as a Node type");
        docs.insert((OneShot, Attributes),
            "An object specifying attributes to modify and their respective values.");
        docs.insert((OneShot, MapAttributes),
            "An object specifying map attributes to modify and their respective key/values.");
        docs.insert((OneShot, Predicates),
            "An object of predicates to check against.");
        docs.insert((Iterator, SpaceName),
            "The name of the space as string or buffer.");
        docs.insert((Iterator, SortBy),
            "The attribute to sort by.");
        docs.insert((Iterator, Limit),
            "The number of results to return.");
        docs.insert((Iterator, MaxMin),
            "Maximize or minimize (e.g., \"max\" or \"min\").");
        docs.insert((Iterator, Predicates),
            "An object of predicates to check against.");
        docs
    };
}
