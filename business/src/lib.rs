pub mod application {
    pub mod basket {
        pub mod price;
    }
}

pub mod domain {
    pub mod logger;
    pub mod basket {
        pub mod model;
        pub mod summary;
        pub mod use_cases {
            pub mod price;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod lookup;
        pub mod model;
        pub mod value_objects;
    }
    pub mod voucher {
        pub mod errors;
        pub mod model;
        pub mod redemption;
    }
}
