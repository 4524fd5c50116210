// Cannot implement `IntoIterator` for DOM collections because both the trait and the structs are
// foreign.
macro_rules! impl_collection_iterator {
    ($iterator:ident, $collection:ty, $item:ty) => {
        pub struct $iterator {
            collection: $collection,
            index: u32,
        }

        impl From<$collection> for $iterator {
            fn from(collection: $collection) -> Self { Self { collection, index: 0 } }
        }

        impl Iterator for $iterator {
            type Item = $item;

            fn next(&mut self) -> Option<Self::Item> {
                let item = self.collection.item(self.index);
                self.index += 1;
                item
            }
        }
    };
}

// `querySelectorAll` returns a static list, so removing the nodes while iterating is fine.
impl_collection_iterator!(NodeListIterator, web_sys::NodeList, web_sys::Node);
