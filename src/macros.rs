/// Builds a `Vec` of [`Route`](crate::Route)s declaratively.
///
/// Each entry is `METHOD "pattern" => handler`, optionally followed by
/// `=> tag` to register the route's reverse function under a tag as well.
///
/// ```
/// use lattice_router::{routes, CompileOptions, Method, Router};
///
/// let router: Router<i32, &str> = Router::compile(
///     routes! {
///         GET "/u/:uid/p/:pid" => 1,
///         POST "/u/:uid/p" => 2,
///         GET "/posts/:id" => 3 => "post-detail",
///         ANY "/health" => 4,
///     },
///     CompileOptions::default(),
/// )
/// .unwrap();
///
/// assert_eq!(*router.find("/u/asd/p/qwe", Method::Get).unwrap().0, 1);
/// ```
#[macro_export]
macro_rules! routes {
    {$($method:ident $pattern:literal => $handler:expr $(=> $tag:expr)?),+ $(,)?} => {{
        let mut __routes = ::std::vec::Vec::new();
        $(
            let __route = $crate::Route::new($crate::routes!(@method $method), $pattern, $handler);
            $(let __route = __route.tagged($tag);)?
            __routes.push(__route);
        )+
        __routes
    }};

    (@method GET) => { $crate::Method::Get };
    (@method HEAD) => { $crate::Method::Head };
    (@method POST) => { $crate::Method::Post };
    (@method PUT) => { $crate::Method::Put };
    (@method DELETE) => { $crate::Method::Delete };
    (@method CONNECT) => { $crate::Method::Connect };
    (@method OPTIONS) => { $crate::Method::Options };
    (@method TRACE) => { $crate::Method::Trace };
    (@method PATCH) => { $crate::Method::Patch };
    (@method ANY) => { $crate::Method::Any };
}
