mod const_strings;
mod enumerators;
mod qualifiers;
mod resolvers;
mod threads;
mod values;
