mod booking_test;
mod middleware_test;
