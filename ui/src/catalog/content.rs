//! Long-form lesson pages: side-by-side code pairs, takeaway cards and the
//! closing capstone.

/// One web-vs-native comparison tab on a lesson page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExample {
    pub title: &'static str,
    pub web: &'static str,
    pub native: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Takeaway {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capstone {
    pub title: &'static str,
    pub summary: &'static str,
    pub source: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonContent {
    pub lesson_id: u32,
    /// Page heading; may differ from the curriculum card title.
    pub headline: &'static str,
    pub intro: &'static str,
    /// Hex color used for the lesson's accent (`--lesson-accent`).
    pub accent: &'static str,
    pub examples: &'static [CodeExample],
    pub takeaways: &'static [Takeaway],
    pub capstone: Option<Capstone>,
}

/// Full page content for a curriculum lesson, if one has been written.
pub fn content_for(lesson_id: u32) -> Option<&'static LessonContent> {
    LESSON_CONTENT
        .iter()
        .find(|content| content.lesson_id == lesson_id)
}

pub static LESSON_CONTENT: [LessonContent; 13] = [
    LessonContent {
        lesson_id: 1,
        headline: "From Div to View",
        intro: "The fundamental shift. Learn the direct translations between React Web elements and React Native primitives.",
        accent: "#61dafb",
        examples: &[
            CodeExample {
                title: "Basic Container",
                web: r#"<div className="container">
  <p>Hello Vicky</p>
</div>"#,
                native: r#"<View style={styles.container}>
  <Text>Hello Vicky</Text>
</View>"#,
                explanation: "In React Native, <View> replaces <div>. For Vicky's first app, remember that all text MUST be wrapped in <Text> components.",
            },
            CodeExample {
                title: "Styling Primitives",
                web: r#"<div style={{
  backgroundColor: 'blue',
  padding: 20
}}>
  <span>Styled</span>
</div>"#,
                native: r#"<View style={{
  backgroundColor: 'blue',
  padding: 20
}}>
  <Text>Styled</Text>
</View>"#,
                explanation: r#"Styling uses camelCase like React Web, but units are "density independent pixels" (no "px" string)."#,
            },
            CodeExample {
                title: "Layout Structure",
                web: r#"<header>
  <h1>Welcome</h1>
</header>"#,
                native: r#"<View style={styles.header}>
  <Text style={styles.title}>Welcome</Text>
</View>"#,
                explanation: "Semantic HTML tags like header, section, or h1 don't exist. Everything is a View or Text positioned via Flexbox.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🎯",
                title: "View is the New Div",
                description: "Every container in React Native is a <View>. It's the fundamental building block for layouts.",
            },
            Takeaway {
                icon: "📝",
                title: "Text Power",
                description: "ALL text content must be inside <Text> components. Raw text will cause a native crash!",
            },
            Takeaway {
                icon: "🎨",
                title: "StyleSheet",
                description: "Use StyleSheet.create() for optimized production styles.",
            },
            Takeaway {
                icon: "📐",
                title: "Flexbox Default",
                description: r#"Every View uses Flexbox with a "column" direction by default."#,
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 2,
        headline: "Flexbox Differences",
        intro: "Master the layout engine. Understand how Flexbox behaves differently on mobile devices compared to the browser.",
        accent: "#61dafb",
        examples: &[
            CodeExample {
                title: "Flex Direction",
                web: r#".container {
  display: flex;
  flex-direction: row; /* Default */
}"#,
                native: r#".container {
  flex: 1;
  flex-direction: column; /* Default */
}"#,
                explanation: "The biggest logic flip: Web defaults to horizontal (row), while Native defaults to vertical (column) to fit tall mobile screens.",
            },
            CodeExample {
                title: "Flex Sizing",
                web: r#".item {
  flex: 1; /* relative to parent height/width */
}"#,
                native: r#".item {
  flex: 1; /* fills all available space */
}"#,
                explanation: "In React Native, flex: 1 tells a component to expand and fill all available space in its parent. It is often used on the root View to fill the whole screen.",
            },
            CodeExample {
                title: "Justify vs Align",
                web: r#".center {
  justify-content: center;
  align-items: center;
}"#,
                native: r#".center {
  justify-content: center;
  align-items: center;
}"#,
                explanation: "The properties look identical, but they flip their behavior based on the flexDirection. In Native (column mode), justifyContent centers vertically.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "↕️",
                title: "Main Axis",
                description: "Controlled by justifyContent. It follows the direction of your flexDirection.",
            },
            Takeaway {
                icon: "↔️",
                title: "Cross Axis",
                description: "Controlled by alignItems. It is always perpendicular to your main axis.",
            },
            Takeaway {
                icon: "📐",
                title: "Percentage vs Flex",
                description: r#"Prefer flex: 1 over width: "100%" for more robust layouts across different screen sizes."#,
            },
            Takeaway {
                icon: "⚡",
                title: "Performance",
                description: "Flexbox is highly optimized in the Yoga engine (the C++ layout engine inside React Native).",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 3,
        headline: "Touchable Components",
        intro: "Interact with the real world. Learn how to handle touch events, provide feedback, and optimize hit areas for human fingers.",
        accent: "#f76b1c",
        examples: &[
            CodeExample {
                title: "Button Events",
                web: r#"<button onClick={() => alert('Hello')}>
  Click Me
</button>"#,
                native: r#"<TouchableOpacity
  onPress={() => alert('Hello')}
>
  <Text>Click Me</Text>
</TouchableOpacity>"#,
                explanation: "In React Native, we use onPress instead of onClick. The TouchableOpacity component provides automatic feedback by slightly dimming the button when pressed.",
            },
            CodeExample {
                title: "Modern Pressable",
                web: r#"<button className="active:scale-95">
  Interactive
</button>"#,
                native: r#"<Pressable
  style={({ pressed }) => [
    { opacity: pressed ? 0.5 : 1 }
  ]}
>
  <Text>Interactive</Text>
</Pressable>"#,
                explanation: r#"Pressable is the modern, more customizable alternative to Touchable. It gives you access to the "pressed" state directly in your styles, allowing for web-like "active" states."#,
            },
            CodeExample {
                title: "Hit Slop",
                web: "/* Hard to hit small buttons */",
                native: r#"<TouchableOpacity
  hitSlop={{ top: 20, bottom: 20, left: 20, right: 20 }}
>
  <Image source={searchIcon} />
</TouchableOpacity>"#,
                explanation: "Fingers are less precise than mouse cursors. The hitSlop prop allows you to expand the clickable area of a button WITHOUT changing its visual size. A mobile must-have!",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🎯",
                title: "Hit Slop",
                description: "Always add hitSlop to small icons to make them easier to tap on small screens.",
            },
            Takeaway {
                icon: "📳",
                title: "Haptic Feedback",
                description: "Vibrate the device slightly on important actions to give users physical confirmation.",
            },
            Takeaway {
                icon: "⚡",
                title: "Responsiveness",
                description: "Use Pressable for complex interactions that need custom state-driven styling.",
            },
            Takeaway {
                icon: "🖱️",
                title: "Double Taps",
                description: "Mobile users expect multi-tap gestures. Reactive Native handles these via the Gesture Responder System.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 4,
        headline: "Lists & ScrollViews",
        intro: "Handle massive amounts of data. Master the ScrollView for simple pages and FlatList for high-performance virtualized feeds.",
        accent: "#10b981",
        examples: &[
            CodeExample {
                title: "Basic List",
                web: r#"<ul>
  {items.map(item => (
    <li key={item.id}>{item.text}</li>
  ))}
</ul>"#,
                native: r#"<ScrollView>
  {items.map(item => (
    <View key={item.id}>
      <Text>{item.text}</Text>
    </View>
  ))}
</ScrollView>"#,
                explanation: "For small datasets, ScrollView works like a web container. However, it renders ALL items at once, which can lead to performance issues if you have hundreds of entries.",
            },
            CodeExample {
                title: "Optimized List",
                web: "/* Often requires virtualized-list libs */",
                native: r#"<FlatList
  data={items}
  renderItem={({ item }) => <ListItem item={item} />}
  keyExtractor={item => item.id}
/>"#,
                explanation: r#"FlatList is the gold standard for native lists. It uses "Virtualization" to only render items currently visible on the screen, saving memory and keeping scrolling buttery smooth."#,
            },
            CodeExample {
                title: "Advanced Features",
                web: "/* Scrolling and refreshing logic */",
                native: r#"<FlatList
  onRefresh={() => refreshData()}
  refreshing={isLoading}
  numColumns={2}
  ListEmptyComponent={<EmptyState />}
/>"#,
                explanation: r#"Native lists come with built-in "Pull-to-Refresh" and column support. This makes creating complex grids and interactive feeds much simpler than on the web."#,
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🚀",
                title: "Virtualization",
                description: "FlatList only renders what you see. It recycles components for maximum performance.",
            },
            Takeaway {
                icon: "📏",
                title: "Item Height",
                description: "Providing a fixed getItemLayout can drastically speed up initial rendering of large lists.",
            },
            Takeaway {
                icon: "🔑",
                title: "Key Extractor",
                description: "Always provide a unique keyExtractor. It allows React to track which items changed efficiently.",
            },
            Takeaway {
                icon: "🏜️",
                title: "Empty State",
                description: "Use the ListEmptyComponent prop to show a placeholder when your data array is empty.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 5,
        headline: "Styling & Theming",
        intro: "Create beautiful, high-performance adaptive UIs. Master the differences between CSS and the Native StyleSheet API.",
        accent: "#764abc",
        examples: &[
            CodeExample {
                title: "Variable Styles",
                web: r#".card {
  padding: 20px;
  background: white;
  border-radius: 8px;
}"#,
                native: r#"const styles = StyleSheet.create({
  card: {
    padding: 20, // No "px" units
    backgroundColor: 'white',
    borderRadius: 8,
  },
});"#,
                explanation: "React Native use unitless numbers for pixels. The StyleSheet.create method is also optimized to send styles once across the bridge, making it much faster than inline objects.",
            },
            CodeExample {
                title: "Platform Styles",
                web: r#"/* Target browsers with prefixes */
.box {
  -webkit-appearance: none;
}"#,
                native: r#"const styles = StyleSheet.create({
  container: {
    ...Platform.select({
      ios: { shadowColor: 'black' },
      android: { elevation: 5 },
    }),
  },
});"#,
                explanation: "Styling for specific operating systems is built-in. Use Platform.select to handle differences like shadows (iOS) vs elevation (Android) elegantly.",
            },
            CodeExample {
                title: "Dynamic Sizing",
                web: r#".container {
  width: 100vw;
  height: 50vh;
}"#,
                native: r#"const { width, height } = Dimensions.get('window');

const styles = StyleSheet.create({
  container: {
    width: width,
    height: height / 2,
  },
});"#,
                explanation: "Instead of CSS units like vh/vw, we use the Dimensions API to get real pixel values from the device and calculate layout logic in JavaScript.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🎨",
                title: "No Cascading",
                description: "Styles do not inherit (except for Text components). You must style each component explicitly.",
            },
            Takeaway {
                icon: "📐",
                title: "Logical Pixels",
                description: r#"Units are "Density Independent Pixels" (dp). RN handles the math for high-DPI screens automatically."#,
            },
            Takeaway {
                icon: "👻",
                title: "Shadows",
                description: r#"Shadows are tricky. Android uses "elevation" while iOS uses shadow properties. Use libraries for consistency."#,
            },
            Takeaway {
                icon: "🌈",
                title: "Theming",
                description: "Use Context or a Theme provider. Native apps need to react to system appearance changes instantly.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 6,
        headline: "Navigation Patterns",
        intro: "Move beyond URLs. Master the Stack, Tab, and Drawer navigators that define the mobile user experience.",
        accent: "#f76b1c",
        examples: &[
            CodeExample {
                title: "Route Definition",
                web: r#"<BrowserRouter>
  <Route path="/home" component={Home} />
  <Route path="/about" component={About} />
</BrowserRouter>"#,
                native: r#"<Stack.Navigator>
  <Stack.Screen name="Home" component={Home} />
  <Stack.Screen name="About" component={About} />
</Stack.Navigator>"#,
                explanation: r#"In React Native, we don't use URLs. We use "Screens" inside "Navigators". Instead of matching a string in the URL, the app manages a state object of the navigation stack."#,
            },
            CodeExample {
                title: "Navigating",
                web: r#"<Link to="/profile/123">
  Go to Profile
</Link>"#,
                native: r#"<Button
  onPress={() => navigation.navigate('Profile', { userId: '123' })}
  title="Go to Profile"
/>"#,
                explanation: "Navigation is triggered via a hook (useNavigation). You pass the name of the screen and parameters, which the receiving screen accesses via the route prop.",
            },
            CodeExample {
                title: "Header Buttons",
                web: r#"<nav>
  <button onClick={logout}>Logout</button>
</nav>"#,
                native: r#"options={{
  headerRight: () => (
    <Button onPress={logout} title="Logout" />
  ),
}}"#,
                explanation: "In mobile, the header/navigation bar is part of the navigation layout itself. We define header elements as part of the screen options.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "📚",
                title: "The Stack",
                description: r#"Think of navigation as a deck of cards. You "push" new screens on top and "pop" them to go back."#,
            },
            Takeaway {
                icon: "🏠",
                title: "Tabs & Drawer",
                description: "Primary navigation should be always reachable via Bottom Tabs or a side Drawer.",
            },
            Takeaway {
                icon: "🔗",
                title: "Deep Linking",
                description: "Mobile apps use specialized URL schemes (myapp://) to open specific screens from the web.",
            },
            Takeaway {
                icon: "🔄",
                title: "State Driven",
                description: "In React Native, navigation is just state. You can reset the entire stack or jump navigators easily.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 7,
        headline: "Forms & Input",
        intro: "Handle user data gracefully. Master TextInputs, keyboard management, and validation patterns for a smooth mobile experience.",
        accent: "#10b981",
        examples: &[
            CodeExample {
                title: "Input Fields",
                web: r#"<input
  type="text"
  placeholder="Username"
  onChange={(e) => setValue(e.target.value)}
/>"#,
                native: r#"<TextInput
  placeholder="Username"
  onChangeText={(text) => setValue(text)}
  style={styles.input}
/>"#,
                explanation: "In React Native, we use TextInput. Instead of accessing e.target.value, the onChangeText callback provides the string directly. You must style the input manually; it has no default borders.",
            },
            CodeExample {
                title: "Keyboard Types",
                web: r#"<input type="number" />
<input type="email" />"#,
                native: r#"<TextInput keyboardType="numeric" />
<TextInput keyboardType="email-address" />
<TextInput secureTextEntry={true} /> // Password"#,
                explanation: r#"Mobile keyboards are specialized. Trigger numeric, email, or phone pads using the keyboardType prop. For passwords, use secureTextEntry instead of type="password"."#,
            },
            CodeExample {
                title: "Keyboard Avoidance",
                web: r#"/* Browser handles scroll */
<form>
  <input />
</form>"#,
                native: r#"<KeyboardAvoidingView behavior="padding">
  <ScrollView>
    <TextInput />
  </ScrollView>
</KeyboardAvoidingView>"#,
                explanation: "Software keyboards cover the screen. Wrap your forms in a KeyboardAvoidingView to ensure the input field stays visible when the user starts typing.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "⌨️",
                title: "Auto Capitalize",
                description: r#"Control the keyboard behavior. Use autoCapitalize="none" for emails and usernames."#,
            },
            Takeaway {
                icon: "✅",
                title: "Validation",
                description: "Native validation happens in JavaScript (libraries like Yup or Zod) since there is no HTML5 validation.",
            },
            Takeaway {
                icon: "📱",
                title: "Return Key",
                description: r#"Change the "Enter" key label (e.g., "Go", "Next", "Search") using the returnKeyType prop."#,
            },
            Takeaway {
                icon: "👆",
                title: "Focus Management",
                description: "Use refs to automatically focus the next input field when a user finishes the current one.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 8,
        headline: "Native APIs",
        intro: "Harness the full power of hardware. Master Camera, GPS, Haptics, and Storage via the Native Bridge.",
        accent: "#61dafb",
        examples: &[
            CodeExample {
                title: "Hardware Access",
                web: r#"/* Browser permission needed */
navigator.geolocation.getCurrentPosition(pos => {
  console.log(pos.coords.latitude);
});"#,
                native: r#"import { Geolocation } from 'react-native';

Geolocation.getCurrentPosition(info => {
  console.log(info.coords.latitude);
});"#,
                explanation: r#"React Native requires explicitly defined permissions in your "plist" or "manifest" files. Without these, hardware calls will fail silently or crash the app."#,
            },
            CodeExample {
                title: "Physical Haptics",
                web: "/* No standard web API for bass-rhythm vibration */",
                native: r#"import { Vibration } from 'react-native';

const triggerSuccess = () => {
  Vibration.vibrate(100); // 100ms
};"#,
                explanation: "Physical haptics are core to mobile UX. React Native provides the Vibration API to provide tactile feedback, something the web lacks.",
            },
            CodeExample {
                title: "Camera Access",
                web: r#"<input type="file" capture="camera">"#,
                native: r#"import { launchCamera } from 'react-native-image-picker';

const takePhoto = async () => {
  const result = await launchCamera();
  setPhoto(result.assets[0].uri);
};"#,
                explanation: "Programmable APIs offer better integration than <input> tags. You can trigger the camera UI or gallery directly from your logic.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🔐",
                title: "Permissions",
                description: "Native permissions are granular. You must check and request access before hardware usage.",
            },
            Takeaway {
                icon: "🔋",
                title: "Battery Usage",
                description: "APIs like continuous GPS drain battery. Always stop listeners when a screen is blurred.",
            },
            Takeaway {
                icon: "📡",
                title: "Async Bridge",
                description: r#"Hardware calls are asynchronous. Handle the "Bridge" state during hardware responses."#,
            },
            Takeaway {
                icon: "🛠️",
                title: "Community",
                description: "Use libraries like Expo or react-native-community for secondary hardware features.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 9,
        headline: "Animations",
        intro: "Bring your UI to life. Master the Animated API, LayoutAnimation, and the physics-based logic that makes mobile apps feel premium.",
        accent: "#764abc",
        examples: &[
            CodeExample {
                title: "Transitions",
                web: r#".box {
  transition: transform 0.3s ease;
}
.box:hover {
  transform: scale(1.1);
}"#,
                native: r#"Animated.timing(scaleValue, {
  toValue: 1.1,
  duration: 300,
  useNativeDriver: true,
}).start();"#,
                explanation: r#"In React Native, animations are imperative. You define animated values and trigger "timing" or "spring" functions. Use useNativeDriver: true to send the animation to the UI thread for 60fps performance."#,
            },
            CodeExample {
                title: "Spring Physics",
                web: "/* Often requires heavy libraries */",
                native: r#"Animated.spring(posValue, {
  toValue: 100,
  friction: 7,
  tension: 40,
  useNativeDriver: true,
}).start();"#,
                explanation: "Native apps rely heavily on physics. The Spring API allows for bouncy, natural-feeling movements that respond to mass and friction, making your app feel high-quality.",
            },
            CodeExample {
                title: "Layout Changes",
                web: "/* Browser handles reflow */",
                native: r#"LayoutAnimation.configureNext(
  LayoutAnimation.Presets.spring
);
setExpanded(!expanded);"#,
                explanation: "If you want entire components to slide into place when state changes, use LayoutAnimation. It automatically animates any layout change that happens in the next render cycle.",
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🏎️",
                title: "Native Driver",
                description: "Always use useNativeDriver: true for transform and opacity animations to avoid the JS bridge bottleneck.",
            },
            Takeaway {
                icon: "💎",
                title: "Reanimated",
                description: r#"For complex gesture-based animations, the "react-native-reanimated" library is the industry standard."#,
            },
            Takeaway {
                icon: "🕹️",
                title: "Imperative API",
                description: "Unlike Framer Motion on the web, the core RN API is imperative (value.setValue, value.interpolate).",
            },
            Takeaway {
                icon: "⏸️",
                title: "InteractionManager",
                description: "Schedule heavy tasks to run after animations finish to prevent dropped frames during transitions.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 10,
        headline: "Performance Optimization",
        intro: "Build smooth, professional apps. Master the JS Bridge, virtualization strategies, and memory management for low-end devices.",
        accent: "#10b981",
        examples: &[
            CodeExample {
                title: "Memoization",
                web: r#"const MyItem = React.memo(({ data }) => (
  <div>{data.name}</div>
));"#,
                native: r#"const ListItem = React.memo(({ item }) => (
  <View><Text>{item.title}</Text></View>
));"#,
                explanation: "Performance on mobile is largely about preventing unnecessary renders in large lists. Memoizing list items is critical for smooth scrolling as the JS thread needs to remain free for the bridge.",
            },
            CodeExample {
                title: "Image Loading",
                web: r#"<img src="large.jpg" loading="lazy" />"#,
                native: r#"<Image
  source={{ uri: 'large.jpg' }}
  style={{ width: 100, height: 100 }}
/>"#,
                explanation: r#"Unsized images can crash mobile apps by consuming all RAM. Always provide dimensions to the Image component, and use libraries like "react-native-fast-image" for advanced caching."#,
            },
            CodeExample {
                title: "The Bridge",
                web: "/* Direct DOM access */",
                native: r#"/* Minimize passes across the bridge */
// Instead of sending 100 small updates:
const data = expensiveLogic();
// Send one final state update"#,
                explanation: r#"Every piece of data sent from JavaScript to Native crosses "The Bridge." High-frequency updates (like scroll positions) should be handled on the Native side whenever possible to avoid lag."#,
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🧵",
                title: "Threads",
                description: "React Native has two threads: JS and UI. If JS is busy, animations handled by the UI thread will still run smoothly.",
            },
            Takeaway {
                icon: "📦",
                title: "Bundle Size",
                description: "Large JS bundles take longer to parse on low-end Android devices. Use tree-shaking and avoid heavy libraries.",
            },
            Takeaway {
                icon: "🖼️",
                title: "Image Sizing",
                description: "Mobile screens are small. Don't load a 4K image into a 100x100 thumbnail; it wastes GPU memory.",
            },
            Takeaway {
                icon: "📈",
                title: "Profiling",
                description: "Use the Perf Monitor (built into the dev menu) to track your frame rates (FPS) in real-time.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 11,
        headline: "Platform-Specific Code",
        intro: r#"Master the "Write Once" philosophy. Learn how to optimize for both iOS and Android while maintaining a single codebase."#,
        accent: "#f76b1c",
        examples: &[
            CodeExample {
                title: "Platform Detection",
                web: r#"/* Generic JS for all browsers */
const fontSize = 16;
const font = 'Inter, sans-serif';"#,
                native: r#"import { Platform, StyleSheet } from 'react-native';

const styles = StyleSheet.create({
  text: {
    fontSize: Platform.OS === 'ios' ? 20 : 16,
    fontFamily: Platform.select({
      ios: 'San Francisco',
      android: 'Roboto',
    }),
  },
});"#,
                explanation: "React Native allows you to write conditional code based on the operating system. Use Platform.select to merge styles together, ensuring your app feels native on both iOS and Android.",
            },
            CodeExample {
                title: "Platform Files",
                web: r#"/* index.js */
import Button from './Button';"#,
                native: r#"/* Button.ios.js */
/* Button.android.js */

// In your screen:
import Button from './Button';
// RN automatically picks .ios or .android"#,
                explanation: "If a logic is too complex for simple ternaries, create separate files. React Native automatically imports the .ios.js or .android.js version based on the user device.",
            },
            CodeExample {
                title: "Hardware Safe Zones",
                web: r#"/* Browser handles scroll */
<div style={{ padding: '20px' }}>
  <p>Content</p>
</div>"#,
                native: r#"<SafeAreaView style={{ flex: 1 }}>
  <View style={{ padding: 20 }}>
    <Text>Safe from the Notch!</Text>
  </View>
</SafeAreaView>"#,
                explanation: r#"Modern phones have notches and speaker "islands." SafeAreaView automatically adds padding to ensure your content is not cut off by physical device hardware."#,
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🍎",
                title: "iOS Patterns",
                description: r#"Focus on "San Francisco" font, centered headers, and smooth edge-swiping for navigation."#,
            },
            Takeaway {
                icon: "🤖",
                title: "Android Patterns",
                description: r#"Focus on the "Back" button hardware, "Roboto" font, and Material Design elevation ripples."#,
            },
            Takeaway {
                icon: "📁",
                title: "Naming",
                description: "Use the dot-notation extensions (.ios.js) for platform-specific assets like icons or complex helper functions.",
            },
            Takeaway {
                icon: "📐",
                title: "Status Bar",
                description: "Use the StatusBar component to control the color of the device clock and battery icons on a per-screen basis.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 12,
        headline: "Testing & Debugging",
        intro: "Ship with confidence. Master the specialized tools for debugging the bridge and testing native components in cross-platform environments.",
        accent: "#61dafb",
        examples: &[
            CodeExample {
                title: "Console & Logs",
                web: r#"/* Inspect in Chrome DevTools */
console.log('App Loaded');"#,
                native: r#"/* Inspect in Flipper or Chrome */
console.log('Native App Loaded');
/* Use LogBox to ignore warnings */
LogBox.ignoreAllLogs();"#,
                explanation: "React Native logs can be viewed in the terminal where you start the packager, or in external tools like Flipper. LogBox is a built-in feature that allows you to manage the floating yellow/red boxes that appear during development.",
            },
            CodeExample {
                title: "Redbox & Crash",
                web: "/* Blank white screen */",
                native: r#"/* Full screen Redbox error */
const throwNativeError = () => {
  throw new Error('Native Crash!');
};"#,
                explanation: r#"When a fatal error occurs in React Native, the app shows a "Redbox" error screen with a full stack trace. Unlike the web, where the page might just go blank, mobile apps are more vocal about failures in debug mode."#,
            },
            CodeExample {
                title: "React Testing Library",
                web: "import { render, screen } from '@testing-library/react';",
                native: r#"import { render, fireEvent } from '@testing-library/react-native';

test('button click', () => {
  const { getByText } = render(<MyButton />);
  fireEvent.press(getByText('Click me'));
});"#,
                explanation: r#"Testing looks almost identical to the web! React Native Testing Library allows you to render components and fire events like "press" instead of "click". You can still use Jest as your primary test runner."#,
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🐬",
                title: "Flipper",
                description: "Facebook's desktop tool for debugging RN. Inspect the database, network, and layout in real-time.",
            },
            Takeaway {
                icon: "📸",
                title: "Snapshots",
                description: "Native UIs are complex. Snapshot testing ensures your components don't change pixel-perfect layout unexpectedly.",
            },
            Takeaway {
                icon: "🚧",
                title: "Detox",
                description: "For end-to-end testing, use Detox. It simulates a real user interacting with your app on a real device.",
            },
            Takeaway {
                icon: "🧰",
                title: "React DevTools",
                description: "You can still use the React component inspector! Connect it to your mobile device to view props and state.",
            },
        ],
        capstone: None,
    },
    LessonContent {
        lesson_id: 13,
        headline: "Mobile Security",
        intro: "Fortify your applications. Master encrypted storage, biometric authentication, and network-level security to protect user privacy.",
        accent: "#ef4444",
        examples: &[
            CodeExample {
                title: "Secure Storage",
                web: r#"/* LocalStorage is NOT secure */
localStorage.setItem('token', '123');"#,
                native: r#"import * as Keychain from 'react-native-keychain';

// Store credentials securely
await Keychain.setGenericPassword(
  'username',
  'password123'
);"#,
                explanation: "In React Native, sensitive data like Auth Tokens should NEVER be stored in AsyncStorage (the LocalStorage equivalent). Use the Keychain (iOS) or Keystore (Android) for encrypted at-rest storage.",
            },
            CodeExample {
                title: "Biometrics",
                web: "/* WebAuthn (complex to setup) */",
                native: r#"import ReactNativeBiometrics from 'react-native-biometrics';

const rnBiometrics = new ReactNativeBiometrics();
const { success } = await rnBiometrics.simplePrompt({
  promptMessage: 'Confirm Identity'
});"#,
                explanation: "Native apps have direct access to FaceID and Fingerprint sensors. This allows for seamless, secure user verification without requiring full passwords for every session.",
            },
            CodeExample {
                title: "SSL Pinning",
                web: "/* Handled by the Browser */",
                native: r#"/* Use react-native-ssl-pinning */
fetch('https://api.myapp.com', {
  method: 'GET',
  pkPinning: true,
  certs: ['my_cert']
});"#,
                explanation: r#"To prevent Man-in-the-Middle (MITM) attacks, mobile apps can "pin" specific SSL certificates. This ensures the app only talks to your specific server, even if a user is on a compromised Wi-Fi."#,
            },
        ],
        takeaways: &[
            Takeaway {
                icon: "🔐",
                title: "No AsyncStorage",
                description: "AsyncStorage is plain text. Use Keychain/Keystore for tokens, keys, and private data.",
            },
            Takeaway {
                icon: "🛡️",
                title: "Obfuscation",
                description: "Use ProGuard (Android) and JSC/Hermes bytecode (iOS) to make it harder to reverse-engineer your app.",
            },
            Takeaway {
                icon: "🚫",
                title: "Jailbreak Detect",
                description: "Check if a device is rooted or jailbroken. High-security apps (banking) should block access on compromised devices.",
            },
            Takeaway {
                icon: "🛰️",
                title: "TLS 1.3",
                description: "Always enforce HTTPS and use the latest TLS protocols for every API request your app makes.",
            },
        ],
        capstone: Some(Capstone {
            title: "E-Commerce Elite Template",
            summary: "You've mastered the theory. Now, here is your Capstone Project: A fully functional E-Commerce App template with navigation, state, and native styling.",
            source: r#"// --- FULL PROJECT ARCHITECTURE ---
import React, { useState } from 'react';
import { View, Text, FlatList, TouchableOpacity, StyleSheet, SafeAreaView, Image } from 'react-native';

const PRODUCTS = [
  { id: '1', name: 'Neural Links v2', price: '$299', color: '#61dafb' },
  { id: '2', name: 'Glass Tab Pro', price: '$899', color: '#764abc' },
  { id: '3', name: 'Haptic Glove', price: '$150', color: '#f76b1c' },
];

export default function App() {
  const [cartCount, setCartCount] = useState(0);

  return (
    <SafeAreaView style={styles.container}>
      {/* Header */}
      <View style={styles.header}>
        <Text style={styles.brand}>RN ACADEMY STORE</Text>
        <View style={styles.cartBadge}>
          <Text style={styles.cartText}>{cartCount}</Text>
        </View>
      </View>

      {/* Product List */}
      <FlatList
        data={PRODUCTS}
        keyExtractor={item => item.id}
        renderItem={({ item }) => (
          <View style={styles.card}>
            <View style={[styles.imagePlaceholder, { backgroundColor: item.color }]} />
            <View style={styles.cardInfo}>
              <Text style={styles.name}>{item.name}</Text>
              <Text style={styles.price}>{item.price}</Text>
              <TouchableOpacity
                style={styles.button}
                onPress={() => setCartCount(c => c + 1)}
              >
                <Text style={styles.btnText}>ADD TO CART</Text>
              </TouchableOpacity>
            </View>
          </View>
        )}
      />
    </SafeAreaView>
  );
}

const styles = StyleSheet.create({
  container: { flex: 1, backgroundColor: '#0a0e27' },
  header: { padding: 20, flexDirection: 'row', justifyContent: 'space-between', alignItems: 'center' },
  brand: { fontSize: 24, fontWeight: '900', color: '#fff' },
  cartBadge: { backgroundColor: '#61dafb', borderRadius: 15, paddingHorizontal: 10, paddingVertical: 5 },
  cartText: { color: '#000', fontWeight: 'bold' },
  card: { margin: 20, backgroundColor: 'rgba(255,255,255,0.05)', borderRadius: 20, overflow: 'hidden' },
  imagePlaceholder: { height: 200, width: '100%' },
  cardInfo: { padding: 20 },
  name: { fontSize: 22, fontWeight: 'bold', color: '#fff' },
  price: { color: '#61dafb', marginVertical: 10, fontSize: 18 },
  button: { backgroundColor: '#fff', padding: 15, borderRadius: 10, alignItems: 'center' },
  btnText: { fontWeight: '900', color: '#000' }
});"#,
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CURRICULUM;

    #[test]
    fn every_curriculum_lesson_has_a_page() {
        for lesson in CURRICULUM.iter() {
            assert!(
                content_for(lesson.id).is_some(),
                "lesson {} has no page content",
                lesson.id
            );
        }
    }

    #[test]
    fn pages_carry_three_examples_and_four_takeaways() {
        for content in LESSON_CONTENT.iter() {
            assert_eq!(content.examples.len(), 3, "lesson {}", content.lesson_id);
            assert_eq!(content.takeaways.len(), 4, "lesson {}", content.lesson_id);
        }
    }

    #[test]
    fn only_the_final_lesson_has_a_capstone() {
        let with_capstone: Vec<u32> = LESSON_CONTENT
            .iter()
            .filter(|c| c.capstone.is_some())
            .map(|c| c.lesson_id)
            .collect();
        assert_eq!(with_capstone, vec![13]);
    }

    #[test]
    fn accents_are_hex_colors() {
        for content in LESSON_CONTENT.iter() {
            assert!(content.accent.starts_with('#') && content.accent.len() == 7);
        }
    }
}
