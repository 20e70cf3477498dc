use crate::auth::SessionProvider;
use crate::components::{Footer, Navbar};
use crate::routes::{Route, switch};
use crate::theme::ThemeProvider;
use crate::toast::ToastProvider;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ThemeProvider>
            <SessionProvider>
                <ToastProvider>
                    <BrowserRouter>
                        <div class="min-h-screen flex flex-col bg-base-100 text-base-content">
                            <Navbar />
                            <main class="flex-1">
                                <Switch<Route> render={switch} />
                            </main>
                            <Footer />
                        </div>
                    </BrowserRouter>
                </ToastProvider>
            </SessionProvider>
        </ThemeProvider>
    }
}
